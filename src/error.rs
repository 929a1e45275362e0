//! Error types for the Cynnycty palette

use thiserror::Error;

/// Errors raised when a palette color is addressed by a string name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// The name does not match any palette key
    #[error("Unknown color key: {0}")]
    UnknownColorKey(String),
}

/// Result type alias using PaletteError
pub type PaletteResult<T> = Result<T, PaletteError>;
