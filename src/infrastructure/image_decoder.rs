// SPDX-License-Identifier: MPL-2.0
//! Image decoding adapter using the `image` crate.

use crate::application::port::ImageDecoder;
use crate::domain::error::DecodeError;
use crate::domain::media::RawImage;
use image_rs::{GenericImageView, ImageError};
use std::fs;
use std::path::Path;

/// Decodes PNG and JPEG files into RGBA pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageRsDecoder;

impl ImageRsDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Decodes an in-memory encoded image.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes are not a supported image.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<RawImage, DecodeError> {
        let img = image_rs::load_from_memory(bytes).map_err(decode_error)?;
        let (width, height) = img.dimensions();
        Ok(RawImage::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

impl ImageDecoder for ImageRsDecoder {
    fn decode(&self, path: &Path) -> Result<RawImage, DecodeError> {
        let bytes = fs::read(path).map_err(|e| DecodeError::Io(e.to_string()))?;
        self.decode_bytes(&bytes)
    }
}

fn decode_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::IoError(e) => DecodeError::Io(e.to_string()),
        ImageError::Unsupported(e) => DecodeError::Unsupported(e.to_string()),
        other => DecodeError::Corrupted(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn decodes_png_with_expected_dimensions() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("logo.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("failed to write temporary png");

        let image = ImageRsDecoder::new().decode(&path).expect("png should decode");
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 2);
        assert_eq!(&image.rgba_bytes()[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = ImageRsDecoder::new()
            .decode(&dir.path().join("missing.png"))
            .unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = ImageRsDecoder::new().decode_bytes(b"not an image").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Unsupported(_) | DecodeError::Corrupted(_)
        ));
    }
}
