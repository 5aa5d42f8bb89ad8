// SPDX-License-Identifier: MPL-2.0
//! Product colors and the assets they map to.
//!
//! A [`Palette`] is the fixed, caller-supplied set of swatches. Each
//! [`ColorId`] resolves to exactly one [`AssetReference`] through a naming
//! convention, so the mapping is deterministic and needs no lookup table.

use super::error::PaletteError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque identifier of a product color (e.g. `"blue"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(String);

impl ColorId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the id with its first character upper-cased (`red` → `Red`).
    #[must_use]
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ordered, non-empty, duplicate-free set of selectable colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<ColorId>,
}

impl Palette {
    /// Builds a palette from the given colors, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] for an empty list and
    /// [`PaletteError::Duplicate`] when a color appears twice.
    pub fn new<I, C>(colors: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = C>,
        C: Into<ColorId>,
    {
        let mut list: Vec<ColorId> = Vec::new();
        for color in colors {
            let color = color.into();
            if list.contains(&color) {
                return Err(PaletteError::Duplicate(color.0));
            }
            list.push(color);
        }

        if list.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colors: list })
    }

    #[must_use]
    pub fn contains(&self, color: &ColorId) -> bool {
        self.colors.contains(color)
    }

    /// Returns the first color, used as the default initial selection.
    #[must_use]
    pub fn first(&self) -> &ColorId {
        // Construction rejects empty palettes.
        &self.colors[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorId> {
        self.colors.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Looks up a color by id, failing if it is not a member.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownColor`] if `id` is not in the palette.
    pub fn get(&self, id: &str) -> Result<&ColorId, PaletteError> {
        self.colors
            .iter()
            .find(|color| color.as_str() == id)
            .ok_or_else(|| PaletteError::UnknownColor(id.to_string()))
    }
}

impl From<String> for ColorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Location of the product image shown for a color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetReference(PathBuf);

impl AssetReference {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Asset path under `assets_dir` following the `<Capitalized>.png` convention.
    #[must_use]
    pub fn for_color(assets_dir: &Path, color: &ColorId) -> Self {
        Self(assets_dir.join(format!("{}.png", color.capitalized())))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalized_upper_cases_first_letter_only() {
        assert_eq!(ColorId::new("blue").capitalized(), "Blue");
        assert_eq!(ColorId::new("darkGreen").capitalized(), "DarkGreen");
        assert_eq!(ColorId::new("").capitalized(), "");
    }

    #[test]
    fn palette_rejects_empty_and_duplicates() {
        assert_eq!(
            Palette::new(Vec::<ColorId>::new()),
            Err(PaletteError::Empty)
        );
        assert_eq!(
            Palette::new(["blue", "red", "blue"]),
            Err(PaletteError::Duplicate("blue".to_string()))
        );
    }

    #[test]
    fn palette_preserves_order_and_membership() {
        let palette = Palette::new(["blue", "red", "yellow"]).unwrap();
        assert_eq!(palette.first().as_str(), "blue");
        assert_eq!(palette.len(), 3);
        assert!(palette.contains(&ColorId::new("red")));
        assert!(!palette.contains(&ColorId::new("green")));
        assert_eq!(
            palette.get("green"),
            Err(PaletteError::UnknownColor("green".to_string()))
        );
    }

    #[test]
    fn asset_reference_follows_naming_convention() {
        let asset = AssetReference::for_color(Path::new("images"), &ColorId::new("red"));
        assert_eq!(asset.path(), Path::new("images").join("Red.png"));
    }
}
