// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

mod asset;
mod palette;
mod upload;

pub use asset::AssetLoadError;
pub use palette::PaletteError;
pub use upload::{DecodeError, ValidationError};
