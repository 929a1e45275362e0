//! CSS custom properties for the brand palette.

use super::colors::COLORS;

/// Render the palette as a `:root` block of CSS custom properties
///
/// ```
/// let css = cynnycty_palette::theme::styles::root_variables();
/// assert!(css.contains("--primary-red: #FF3B30;"));
/// ```
pub fn root_variables() -> String {
    let mut css = String::from(":root {\n");
    for (key, hex) in COLORS.iter() {
        css.push_str(&format!("  {}: {};\n", key.css_variable(), hex));
    }
    css.push_str("}\n");
    css
}
