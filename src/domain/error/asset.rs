// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// A product asset could not be loaded for display.
///
/// Non-fatal: the color transition still completes its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoadError {
    /// Location of the asset that failed.
    pub asset: String,
    /// Human-readable failure reason.
    pub reason: String,
}

impl AssetLoadError {
    pub fn new(asset: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to load asset {}: {}", self.asset, self.reason)
    }
}

impl std::error::Error for AssetLoadError {}
