//! Brand palette and its stylesheet projection

pub mod colors;
pub mod styles;
