//! Color constants for the Cynnycty brand palette.
//!
//! [`ColorKey`] is the single list of palette names. Each key carries its hex
//! value, and the [`COLORS`] table, the named constants, the serialized names
//! and the CSS custom properties are all built from that list.

use crate::error::{PaletteError, PaletteResult};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Name of a color in the brand palette
///
/// Misspelled keys do not compile:
///
/// ```compile_fail
/// use cynnycty_palette::ColorKey;
///
/// let _ = ColorKey::PrimaryMagenta;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ColorKey {
    PrimaryRed,
    PrimaryPurple,
    PrimaryCyan,
    PrimaryOrange,
    PrimaryCharcoal,
}

impl ColorKey {
    /// Number of keys in the palette
    pub const COUNT: usize = 5;

    /// Every key, in definition order
    pub const ALL: [ColorKey; Self::COUNT] = [
        ColorKey::PrimaryRed,
        ColorKey::PrimaryPurple,
        ColorKey::PrimaryCyan,
        ColorKey::PrimaryOrange,
        ColorKey::PrimaryCharcoal,
    ];

    pub fn all() -> &'static [ColorKey] {
        &Self::ALL
    }

    /// The key's name as used by the frontend (`primaryRed`, ...)
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorKey::PrimaryRed => "primaryRed",
            ColorKey::PrimaryPurple => "primaryPurple",
            ColorKey::PrimaryCyan => "primaryCyan",
            ColorKey::PrimaryOrange => "primaryOrange",
            ColorKey::PrimaryCharcoal => "primaryCharcoal",
        }
    }

    /// The `#RRGGBB` value for this key
    pub const fn hex(self) -> &'static str {
        match self {
            ColorKey::PrimaryRed => "#FF3B30",
            ColorKey::PrimaryPurple => "#8E44AD",
            ColorKey::PrimaryCyan => "#00B8D9",
            ColorKey::PrimaryOrange => "#FF9500",
            ColorKey::PrimaryCharcoal => "#1C1C1E",
        }
    }

    /// Position of the key in [`ColorKey::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// CSS custom property name, e.g. `--primary-red`
    pub fn css_variable(self) -> String {
        let mut name = String::from("--");
        for ch in self.as_str().chars() {
            if ch.is_ascii_uppercase() {
                name.push('-');
                name.push(ch.to_ascii_lowercase());
            } else {
                name.push(ch);
            }
        }
        name
    }

    /// CSS reference to the custom property, e.g. `var(--primary-red)`
    pub fn css_var(self) -> String {
        format!("var({})", self.css_variable())
    }

    /// Parse a key from its frontend name
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> PaletteResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| {
                tracing::debug!(key = %name, "rejected unknown color key");
                PaletteError::UnknownColorKey(name.to_string())
            })
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ColorKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Immutable mapping from [`ColorKey`] to hex color value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [(ColorKey, &'static str); ColorKey::COUNT],
}

impl Palette {
    const fn new() -> Self {
        let mut entries = [(ColorKey::PrimaryRed, ""); ColorKey::COUNT];
        let mut i = 0;
        while i < ColorKey::COUNT {
            let key = ColorKey::ALL[i];
            entries[i] = (key, key.hex());
            i += 1;
        }
        Self { entries }
    }

    pub const fn get(&self, key: ColorKey) -> &'static str {
        self.entries[key.index()].1
    }

    /// Look up a color by its frontend name
    pub fn lookup(&self, name: &str) -> PaletteResult<&'static str> {
        ColorKey::parse(name).map(|key| self.get(key))
    }

    /// Entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = ColorKey> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|(_, hex)| hex)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<ColorKey> for Palette {
    type Output = str;

    fn index(&self, key: ColorKey) -> &Self::Output {
        self.get(key)
    }
}

// Serialized as a JSON object keyed by frontend name, in definition order
#[cfg(feature = "serde")]
impl serde::Serialize for Palette {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, hex) in self.iter() {
            map.serialize_entry(&key, hex)?;
        }
        map.end()
    }
}

/// The brand palette
pub const COLORS: Palette = Palette::new();

// === PRIMARY ===
pub const PRIMARY_RED: &str = COLORS.get(ColorKey::PrimaryRed);
pub const PRIMARY_PURPLE: &str = COLORS.get(ColorKey::PrimaryPurple);
pub const PRIMARY_CYAN: &str = COLORS.get(ColorKey::PrimaryCyan);
pub const PRIMARY_ORANGE: &str = COLORS.get(ColorKey::PrimaryOrange);
pub const PRIMARY_CHARCOAL: &str = COLORS.get(ColorKey::PrimaryCharcoal);

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(value: &str) -> bool {
        value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_known_values() {
        assert_eq!(COLORS.get(ColorKey::PrimaryRed), "#FF3B30");
        assert_eq!(COLORS.get(ColorKey::PrimaryPurple), "#8E44AD");
        assert_eq!(COLORS.get(ColorKey::PrimaryCyan), "#00B8D9");
        assert_eq!(COLORS.get(ColorKey::PrimaryOrange), "#FF9500");
        assert_eq!(COLORS.get(ColorKey::PrimaryCharcoal), "#1C1C1E");
    }

    #[test]
    fn test_every_value_is_hex_color() {
        for (key, hex) in COLORS.iter() {
            assert!(is_hex_color(hex), "{} has malformed value {}", key, hex);
        }
    }

    #[test]
    fn test_named_constants_match_table() {
        assert_eq!(PRIMARY_RED, &COLORS[ColorKey::PrimaryRed]);
        assert_eq!(PRIMARY_PURPLE, &COLORS[ColorKey::PrimaryPurple]);
        assert_eq!(PRIMARY_CYAN, &COLORS[ColorKey::PrimaryCyan]);
        assert_eq!(PRIMARY_ORANGE, &COLORS[ColorKey::PrimaryOrange]);
        assert_eq!(PRIMARY_CHARCOAL, &COLORS[ColorKey::PrimaryCharcoal]);
    }

    #[test]
    fn test_exactly_five_keys_in_order() {
        let names: Vec<&str> = COLORS.keys().map(ColorKey::as_str).collect();
        assert_eq!(
            names,
            vec![
                "primaryRed",
                "primaryPurple",
                "primaryCyan",
                "primaryOrange",
                "primaryCharcoal",
            ]
        );
        assert_eq!(COLORS.len(), 5);
        assert!(!COLORS.is_empty());
    }

    #[test]
    fn test_index_matches_position() {
        for (i, key) in ColorKey::all().iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for key in ColorKey::all() {
            assert_eq!(ColorKey::parse(key.as_str()), Ok(*key));
            assert_eq!(key.to_string().parse::<ColorKey>(), Ok(*key));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            ColorKey::parse("PrimaryRed"),
            Err(PaletteError::UnknownColorKey("PrimaryRed".to_string()))
        );
        assert!(ColorKey::parse("primary_red").is_err());
        assert!(ColorKey::parse("").is_err());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(COLORS.lookup("primaryCharcoal"), Ok("#1C1C1E"));
        assert!(matches!(
            COLORS.lookup("primaryMagenta"),
            Err(PaletteError::UnknownColorKey(name)) if name == "primaryMagenta"
        ));
    }

    #[test]
    fn test_css_names() {
        assert_eq!(ColorKey::PrimaryRed.css_variable(), "--primary-red");
        assert_eq!(ColorKey::PrimaryCharcoal.css_variable(), "--primary-charcoal");
        assert_eq!(ColorKey::PrimaryCyan.css_var(), "var(--primary-cyan)");
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let first: Vec<_> = COLORS.values().collect();
        let second: Vec<_> = COLORS.values().collect();
        assert_eq!(first, second);
        assert_eq!(COLORS.get(ColorKey::PrimaryRed), COLORS.get(ColorKey::PrimaryRed));
    }
}
