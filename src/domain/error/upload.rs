// SPDX-License-Identifier: MPL-2.0
//! Errors raised while accepting and decoding an uploaded logo.

use std::fmt;

/// Reasons a selected file is rejected before any upload starts.
///
/// Validation happens synchronously and never touches the pending upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The MIME type is not in the allow-list.
    InvalidType {
        /// The MIME type reported for the file.
        mime_type: String,
    },

    /// The file is larger than the configured maximum.
    TooLarge {
        /// Actual file size in bytes.
        size_bytes: u64,
        /// Configured maximum in bytes.
        max_bytes: u64,
    },
}

impl ValidationError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::InvalidType { .. } => "notification-upload-invalid-type",
            ValidationError::TooLarge { .. } => "notification-upload-too-large",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidType { mime_type } => {
                write!(f, "Unsupported file type: {mime_type}")
            }
            ValidationError::TooLarge {
                size_bytes,
                max_bytes,
            } => write!(f, "File too large: {size_bytes} bytes (max {max_bytes})"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure to turn an accepted file into displayable pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The file could not be read.
    Io(String),

    /// The bytes are not in a format the decoder understands.
    Unsupported(String),

    /// The bytes claim a supported format but are malformed.
    Corrupted(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(msg) => write!(f, "I/O error: {msg}"),
            DecodeError::Unsupported(msg) => write!(f, "Unsupported image: {msg}"),
            DecodeError::Corrupted(msg) => write!(f, "Corrupted image: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::InvalidType {
            mime_type: "image/gif".to_string(),
        };
        assert_eq!(format!("{err}"), "Unsupported file type: image/gif");

        let err = ValidationError::TooLarge {
            size_bytes: 6_000_000,
            max_bytes: 5_242_880,
        };
        assert!(format!("{err}").contains("6000000"));
    }

    #[test]
    fn validation_errors_map_to_distinct_keys() {
        let invalid = ValidationError::InvalidType {
            mime_type: String::new(),
        };
        let large = ValidationError::TooLarge {
            size_bytes: 1,
            max_bytes: 0,
        };
        assert_ne!(invalid.i18n_key(), large.i18n_key());
    }

    #[test]
    fn decode_error_display() {
        let err = DecodeError::Corrupted("bad header".to_string());
        assert!(format!("{err}").contains("bad header"));
    }
}
