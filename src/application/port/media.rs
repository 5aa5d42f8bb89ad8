// SPDX-License-Identifier: MPL-2.0
//! Image decoding port.
//!
//! Infrastructure adapters implement [`ImageDecoder`] for both the uploaded
//! logo and the product assets.

use crate::domain::error::DecodeError;
use crate::domain::media::RawImage;
use std::path::Path;

/// Port for turning an image file into RGBA pixels.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: decoding runs on a blocking worker
/// thread, off the UI loop.
///
/// # Example
///
/// ```ignore
/// use canopy::application::port::ImageDecoder;
/// use std::path::Path;
///
/// fn dimensions(decoder: &impl ImageDecoder, path: &Path) -> Option<(u32, u32)> {
///     let image = decoder.decode(path).ok()?;
///     Some((image.width(), image.height()))
/// }
/// ```
pub trait ImageDecoder: Send + Sync {
    /// Decodes the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the file cannot be read or decoded.
    fn decode(&self, path: &Path) -> Result<RawImage, DecodeError>;
}
