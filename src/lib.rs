//! Cynnycty Color Palette
//!
//! Primary brand colors used throughout the Cynnycty frontend.
//!
//! ## Palette
//!
//! - **Red (#FF3B30)**: `primaryRed`
//! - **Purple (#8E44AD)**: `primaryPurple`
//! - **Cyan (#00B8D9)**: `primaryCyan`
//! - **Orange (#FF9500)**: `primaryOrange`
//! - **Charcoal (#1C1C1E)**: `primaryCharcoal`
//!
//! ## Quick Start
//!
//! ```
//! use cynnycty_palette::{ColorKey, COLORS, PRIMARY_RED};
//!
//! assert_eq!(&COLORS[ColorKey::PrimaryRed], PRIMARY_RED);
//! assert_eq!(COLORS.lookup("primaryCharcoal"), Ok("#1C1C1E"));
//!
//! for (key, hex) in COLORS.iter() {
//!     println!("{}: {}", key, hex);
//! }
//! ```

pub mod error;
pub mod theme;

// Re-exports
pub use error::{PaletteError, PaletteResult};
pub use theme::colors::{
    ColorKey, Palette, COLORS, PRIMARY_CHARCOAL, PRIMARY_CYAN, PRIMARY_ORANGE, PRIMARY_PURPLE,
    PRIMARY_RED,
};
pub use theme::styles::root_variables;
