// SPDX-License-Identifier: MPL-2.0
//! Turns a file picked in the dialog into a [`FileDescriptor`].

use crate::domain::upload::FileDescriptor;
use image_rs::ImageFormat;
use std::fs;
use std::io;
use std::path::Path;

/// MIME type reported for files whose format cannot be guessed.
pub const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

/// Reads file metadata and guesses the MIME type from the extension.
///
/// Only metadata is read here; the bytes are read later by the decoder.
///
/// # Errors
///
/// Returns an I/O error if the file metadata cannot be read.
pub fn probe_file(path: &Path) -> io::Result<FileDescriptor> {
    let metadata = fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(FileDescriptor::new(
        name,
        mime_type_for(path),
        metadata.len(),
        path,
    ))
}

/// Returns the MIME type matching the file extension.
#[must_use]
pub fn mime_type_for(path: &Path) -> &'static str {
    ImageFormat::from_path(path).map_or(UNKNOWN_MIME_TYPE, |format| format.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn guesses_mime_from_extension() {
        assert_eq!(mime_type_for(Path::new("logo.png")), "image/png");
        assert_eq!(mime_type_for(Path::new("logo.JPG")), "image/jpeg");
        assert_eq!(mime_type_for(Path::new("notes.txt")), UNKNOWN_MIME_TYPE);
        assert_eq!(mime_type_for(Path::new("README")), UNKNOWN_MIME_TYPE);
    }

    #[test]
    fn probe_reads_name_and_size() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("logo.png");
        fs::write(&path, [0u8; 42]).expect("failed to write file");

        let file = probe_file(&path).expect("probe should succeed");
        assert_eq!(file.name, "logo.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size_bytes, 42);
        assert_eq!(file.path(), path.as_path());
    }

    #[test]
    fn probe_missing_file_fails() {
        let dir = tempdir().expect("failed to create temp dir");
        assert!(probe_file(&dir.path().join("missing.png")).is_err());
    }
}
