// SPDX-License-Identifier: MPL-2.0
//! Upload value types: the selected file, the policy it is checked against,
//! and the handle tracking one read-and-preview operation.

use super::error::ValidationError;
use super::media::RawImage;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metadata of a file chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Where the bytes are read from when decoding.
    pub path: PathBuf,
}

impl FileDescriptor {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size_bytes: u64,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
            path: path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Acceptance rules for uploaded logos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Allowed MIME types, compared case-insensitively.
    pub allowed_mime_types: Vec<String>,
    /// Largest accepted file, inclusive.
    pub max_size_bytes: u64,
    /// Artificial processing time between decode and commit.
    pub settle_delay: Duration,
}

impl UploadPolicy {
    /// Checks a file against the policy. The type is checked before the size.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidType`] or [`ValidationError::TooLarge`].
    pub fn validate(&self, file: &FileDescriptor) -> Result<(), ValidationError> {
        let allowed = self
            .allowed_mime_types
            .iter()
            .any(|mime| mime.eq_ignore_ascii_case(file.mime_type.trim()));
        if !allowed {
            return Err(ValidationError::InvalidType {
                mime_type: file.mime_type.clone(),
            });
        }

        if file.size_bytes > self.max_size_bytes {
            return Err(ValidationError::TooLarge {
                size_bytes: file.size_bytes,
                max_bytes: self.max_size_bytes,
            });
        }

        Ok(())
    }
}

/// Sequence number of an upload. Later uploads have larger ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UploadId(u64);

impl UploadId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upload#{}", self.0)
    }
}

/// Completion status of an upload handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum UploadStatus {
    Pending = 0,
    Completed = 1,
    Cancelled = 2,
    Failed = 3,
}

impl UploadStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != UploadStatus::Pending
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => UploadStatus::Completed,
            2 => UploadStatus::Cancelled,
            3 => UploadStatus::Failed,
            _ => UploadStatus::Pending,
        }
    }
}

#[derive(Debug)]
struct HandleInner {
    id: UploadId,
    file: FileDescriptor,
    cancelled: AtomicBool,
    status: AtomicU8,
}

/// One outstanding read-and-preview operation.
///
/// Clones share the cancellation flag and status, so the copy returned to the
/// caller observes the final outcome. A handle leaves `Pending` exactly once;
/// terminal statuses are absorbing.
#[derive(Debug, Clone)]
pub struct UploadHandle {
    inner: Arc<HandleInner>,
}

impl UploadHandle {
    pub(crate) fn new(id: UploadId, file: FileDescriptor) -> Self {
        Self {
            inner: Arc::new(HandleInner {
                id,
                file,
                cancelled: AtomicBool::new(false),
                status: AtomicU8::new(UploadStatus::Pending as u8),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> UploadId {
        self.inner.id
    }

    #[must_use]
    pub fn file(&self) -> &FileDescriptor {
        &self.inner.file
    }

    #[must_use]
    pub fn status(&self) -> UploadStatus {
        UploadStatus::from_u8(self.inner.status.load(Ordering::Acquire))
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    pub(crate) fn request_cancel(&self) {
        self.inner.cancelled.store(true, Ordering::Release);
    }

    /// Moves the handle from `Pending` to `status`.
    ///
    /// Returns `false` (and changes nothing) if the handle is already terminal
    /// or `status` is `Pending`.
    pub(crate) fn settle(&self, status: UploadStatus) -> bool {
        if !status.is_terminal() {
            return false;
        }
        self.inner
            .status
            .compare_exchange(
                UploadStatus::Pending as u8,
                status as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

impl PartialEq for UploadHandle {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for UploadHandle {}

/// Displayable result of a completed upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub file_name: String,
    pub image: RawImage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> UploadPolicy {
        UploadPolicy {
            allowed_mime_types: vec!["image/png".into(), "image/jpeg".into()],
            max_size_bytes: 100,
            settle_delay: Duration::from_millis(10),
        }
    }

    #[test]
    fn policy_accepts_allowed_type_up_to_max() {
        let file = FileDescriptor::new("a.png", "image/png", 100, "a.png");
        assert_eq!(policy().validate(&file), Ok(()));

        let upper = FileDescriptor::new("a.png", "IMAGE/PNG", 1, "a.png");
        assert_eq!(policy().validate(&upper), Ok(()));
    }

    #[test]
    fn policy_checks_type_before_size() {
        let file = FileDescriptor::new("a.gif", "image/gif", 1_000, "a.gif");
        assert!(matches!(
            policy().validate(&file),
            Err(ValidationError::InvalidType { .. })
        ));
    }

    #[test]
    fn policy_rejects_oversized() {
        let file = FileDescriptor::new("a.png", "image/png", 101, "a.png");
        assert_eq!(
            policy().validate(&file),
            Err(ValidationError::TooLarge {
                size_bytes: 101,
                max_bytes: 100
            })
        );
    }

    #[test]
    fn handle_settles_exactly_once() {
        let handle = UploadHandle::new(UploadId::new(1), FileDescriptor::new("a", "b", 0, "c"));
        let observer = handle.clone();

        assert_eq!(observer.status(), UploadStatus::Pending);
        assert!(!handle.settle(UploadStatus::Pending));
        assert!(handle.settle(UploadStatus::Cancelled));
        assert!(!handle.settle(UploadStatus::Completed));
        assert_eq!(observer.status(), UploadStatus::Cancelled);
    }

    #[test]
    fn cancel_flag_is_shared_between_clones() {
        let handle = UploadHandle::new(UploadId::new(7), FileDescriptor::new("a", "b", 0, "c"));
        let observer = handle.clone();
        handle.request_cancel();
        assert!(observer.is_cancelled());
        assert_eq!(observer, handle);
    }
}
