// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! Pixel data shared by the uploaded logo preview and the product assets,
//! independent of any presentation or infrastructure concerns.

pub mod types;

pub use types::RawImage;
