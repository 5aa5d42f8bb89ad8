// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Palette construction or lookup failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// A palette needs at least one color.
    Empty,

    /// The same color appears twice.
    Duplicate(String),

    /// The color is not a member of the palette.
    UnknownColor(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::Empty => write!(f, "Palette has no colors"),
            PaletteError::Duplicate(color) => write!(f, "Duplicate palette color: {color}"),
            PaletteError::UnknownColor(color) => write!(f, "Color not in palette: {color}"),
        }
    }
}

impl std::error::Error for PaletteError {}
