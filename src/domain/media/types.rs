// SPDX-License-Identifier: MPL-2.0
//! Core image types for the domain layer.

use std::sync::Arc;

/// Decoded image pixels without presentation dependencies.
///
/// The presentation layer converts this to framework-specific handles
/// (e.g., `iced::widget::image::Handle`). Pixel data is shared, so clones
/// travelling through messages and events do not copy the buffer.
///
/// # Example
///
/// ```
/// use canopy::domain::media::RawImage;
///
/// let image = RawImage::from_rgba(2, 2, vec![255u8; 2 * 2 * 4]);
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.byte_len(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn new(width: u32, height: u32, rgba_bytes: Arc<Vec<u8>>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes,
        }
    }

    /// Creates a new `RawImage` from owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        Self::new(width, height, Arc::new(rgba_bytes))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns the pixel buffer as an owned vector (copies the shared data).
    #[must_use]
    pub fn to_rgba_vec(&self) -> Vec<u8> {
        self.rgba_bytes.as_ref().clone()
    }

    /// Size of the pixel buffer in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.rgba_bytes.len()
    }

    /// Returns `true` when the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rgba_bytes.is_empty()
    }
}

impl PartialEq for RawImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for RawImage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_image_creation() {
        let image = RawImage::from_rgba(10, 10, vec![0u8; 10 * 10 * 4]);

        assert_eq!(image.width(), 10);
        assert_eq!(image.height(), 10);
        assert_eq!(image.byte_len(), 400);
        assert!(!image.is_empty());
    }

    #[test]
    #[should_panic(expected = "RGBA data length mismatch")]
    fn raw_image_invalid_size() {
        let _ = RawImage::from_rgba(10, 10, vec![0u8; 100]);
    }

    #[test]
    fn clones_share_pixels() {
        let image = RawImage::from_rgba(1, 1, vec![1, 2, 3, 4]);
        let copy = image.clone();
        assert_eq!(image, copy);
        assert_eq!(copy.to_rgba_vec(), vec![1, 2, 3, 4]);
    }
}
