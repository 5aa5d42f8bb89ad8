// SPDX-License-Identifier: MPL-2.0
//! Asset resolution port.

use crate::domain::color::{AssetReference, ColorId};
use std::fmt;

/// Maps a color to the product image shown for it.
///
/// Implementations must be pure: the same color always yields the same
/// reference.
pub trait AssetResolver: fmt::Debug {
    fn resolve(&self, color: &ColorId) -> AssetReference;
}
