// SPDX-License-Identifier: MPL-2.0
//! Shared UI state record.

use crate::domain::color::ColorId;
use crate::domain::upload::UploadHandle;

/// State shared by the upload and color-transition state machines.
///
/// `current_color` holds the *settled* color and is only written when a
/// transition commits. `pending_upload` holds at most one live handle.
#[derive(Debug, Clone)]
pub struct UiState {
    pub(super) current_color: ColorId,
    pub(super) pending_upload: Option<UploadHandle>,
}

impl UiState {
    #[must_use]
    pub fn new(initial_color: ColorId) -> Self {
        Self {
            current_color: initial_color,
            pending_upload: None,
        }
    }

    #[must_use]
    pub fn current_color(&self) -> &ColorId {
        &self.current_color
    }

    #[must_use]
    pub fn pending_upload(&self) -> Option<&UploadHandle> {
        self.pending_upload.as_ref()
    }
}
