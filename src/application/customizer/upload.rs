// SPDX-License-Identifier: MPL-2.0
//! Upload state machine.
//!
//! Each accepted file gets a fresh [`UploadHandle`]. The handle is `Pending`
//! while its decode and settle delay run, and leaves that state exactly once:
//!
//! ```text
//! Pending --decode ok--> (settle delay) --still current--> Completed
//! Pending --decode error--> Failed
//! Pending --cancel / newer upload--> Cancelled
//! ```
//!
//! Callbacks identify their operation by [`UploadId`]. A callback whose id is
//! no longer the pending one, or whose handle was cancelled, is dropped.

use super::outbox::{Job, Outbox};
use super::state::UiState;
use crate::application::port::UiEvent;
use crate::domain::error::{DecodeError, ValidationError};
use crate::domain::media::RawImage;
use crate::domain::upload::{
    FileDescriptor, PreviewImage, UploadHandle, UploadId, UploadPolicy, UploadStatus,
};

/// Owns the lifecycle of the single in-flight upload.
#[derive(Debug)]
pub struct UploadController {
    policy: UploadPolicy,
    last_id: u64,
}

impl UploadController {
    #[must_use]
    pub fn new(policy: UploadPolicy) -> Self {
        Self { policy, last_id: 0 }
    }

    #[must_use]
    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Validates `file` and starts reading it.
    ///
    /// A previously pending upload is cancelled first. Emits
    /// `UploadStarted` and schedules a [`Job::Decode`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] without touching `state` if the file's
    /// type or size is not accepted.
    pub fn submit_file(
        &mut self,
        state: &mut UiState,
        file: FileDescriptor,
        out: &mut Outbox,
    ) -> Result<UploadHandle, ValidationError> {
        if let Err(err) = self.policy.validate(&file) {
            tracing::info!(file = %file.name, error = %err, "upload rejected");
            return Err(err);
        }

        self.cancel(state, out);

        self.last_id += 1;
        let handle = UploadHandle::new(UploadId::new(self.last_id), file.clone());
        state.pending_upload = Some(handle.clone());

        tracing::info!(
            upload = %handle.id(),
            file = %file.name,
            size_bytes = file.size_bytes,
            "upload started"
        );
        out.emit(UiEvent::UploadStarted {
            file_name: file.name.clone(),
        });
        out.schedule(Job::Decode {
            upload: handle.id(),
            file,
        });

        Ok(handle)
    }

    /// Decode finished; wait out the settle delay before committing.
    pub fn on_decode_complete(
        &self,
        state: &UiState,
        upload: UploadId,
        image: RawImage,
        out: &mut Outbox,
    ) {
        if current_handle(state, upload).is_none() {
            tracing::debug!(%upload, "dropping stale decode result");
            return;
        }

        out.schedule(Job::Settle {
            upload,
            image,
            delay: self.policy.settle_delay,
        });
    }

    /// Settle delay elapsed. Cancellation may have happened during the delay,
    /// so the handle is checked again before committing.
    pub fn on_settle_elapsed(
        &self,
        state: &mut UiState,
        upload: UploadId,
        image: RawImage,
        out: &mut Outbox,
    ) {
        let Some(handle) = take_current(state, upload) else {
            tracing::debug!(%upload, "dropping stale settle timer");
            return;
        };

        if !handle.settle(UploadStatus::Completed) {
            return;
        }

        tracing::info!(
            %upload,
            width = image.width(),
            height = image.height(),
            "upload completed"
        );
        out.emit(UiEvent::UploadCompleted {
            preview: PreviewImage {
                file_name: handle.file().name.clone(),
                image,
            },
        });
    }

    /// Decode failed; the upload ends in `Failed`.
    pub fn on_decode_error(
        &self,
        state: &mut UiState,
        upload: UploadId,
        error: &DecodeError,
        out: &mut Outbox,
    ) {
        let Some(handle) = take_current(state, upload) else {
            tracing::debug!(%upload, "dropping stale decode error");
            return;
        };

        if !handle.settle(UploadStatus::Failed) {
            return;
        }

        tracing::warn!(%upload, file = %handle.file().name, %error, "upload failed");
        out.emit(UiEvent::UploadFailed {
            file_name: handle.file().name.clone(),
            reason: error.to_string(),
        });
    }

    /// Cancels the pending upload, if any.
    ///
    /// Returns `false` and emits nothing when no upload is pending, so
    /// repeated calls are harmless.
    pub fn cancel(&self, state: &mut UiState, out: &mut Outbox) -> bool {
        let Some(handle) = state.pending_upload.take() else {
            return false;
        };

        handle.request_cancel();
        handle.settle(UploadStatus::Cancelled);

        tracing::info!(upload = %handle.id(), "upload cancelled");
        out.emit(UiEvent::UploadCancelled);
        true
    }
}

fn current_handle(state: &UiState, upload: UploadId) -> Option<&UploadHandle> {
    state
        .pending_upload
        .as_ref()
        .filter(|handle| handle.id() == upload && !handle.is_cancelled())
}

fn take_current(state: &mut UiState, upload: UploadId) -> Option<UploadHandle> {
    current_handle(state, upload)?;
    state.pending_upload.take()
}
