// SPDX-License-Identifier: MPL-2.0
//! Product asset lookup by naming convention.

use crate::application::port::AssetResolver;
use crate::domain::color::{AssetReference, ColorId};
use std::path::{Path, PathBuf};

/// Resolves `blue` to `<assets_dir>/Blue.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConventionResolver {
    assets_dir: PathBuf,
}

impl NamingConventionResolver {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}

impl AssetResolver for NamingConventionResolver {
    fn resolve(&self, color: &ColorId) -> AssetReference {
        AssetReference::for_color(&self.assets_dir, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_capitalized_png_in_assets_dir() {
        let resolver = NamingConventionResolver::new("/opt/canopy/images");
        let asset = resolver.resolve(&ColorId::new("pink"));
        assert_eq!(asset.path(), Path::new("/opt/canopy/images/Pink.png"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = NamingConventionResolver::new("images");
        let color = ColorId::new("green");
        assert_eq!(resolver.resolve(&color), resolver.resolve(&color));
    }
}
