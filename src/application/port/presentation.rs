// SPDX-License-Identifier: MPL-2.0
//! Presentation port: everything the core tells the UI.
//!
//! The core never renders. It emits [`UiEvent`]s and the sink decides how to
//! show them (icon swap, text, opacity, indicator highlighting).

use crate::domain::color::{AssetReference, ColorId};
use crate::domain::upload::PreviewImage;

/// Notifications emitted by the customizer core, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// An upload was accepted and is being read.
    UploadStarted { file_name: String },
    /// The pending upload settled successfully.
    UploadCompleted { preview: PreviewImage },
    /// The pending upload could not be decoded.
    UploadFailed { file_name: String, reason: String },
    /// The pending upload was cancelled (explicitly or by a newer upload).
    UploadCancelled,
    /// A color transition began; the loading indicator turns on.
    TransitionStart,
    /// The selection indicator moved to `color`.
    ActiveColorChanged { color: ColorId },
    /// The product image should fade to transparent.
    FadeOut,
    /// The product image now points at `asset`.
    AssetSwapped { color: ColorId, asset: AssetReference },
    /// The product image should fade back in.
    FadeIn,
    /// The transition settled; the loading indicator turns off.
    TransitionEnd,
}

impl UiEvent {
    /// Returns `true` for events produced by the upload state machine.
    #[must_use]
    pub fn is_upload_event(&self) -> bool {
        matches!(
            self,
            UiEvent::UploadStarted { .. }
                | UiEvent::UploadCompleted { .. }
                | UiEvent::UploadFailed { .. }
                | UiEvent::UploadCancelled
        )
    }
}

/// Receiver of [`UiEvent`]s.
pub trait PresentationSink {
    fn present(&mut self, event: UiEvent);
}

impl PresentationSink for Vec<UiEvent> {
    fn present(&mut self, event: UiEvent) {
        self.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<UiEvent> = Vec::new();
        sink.present(UiEvent::TransitionStart);
        sink.present(UiEvent::TransitionEnd);
        assert_eq!(sink, vec![UiEvent::TransitionStart, UiEvent::TransitionEnd]);
    }

    #[test]
    fn upload_events_are_classified() {
        assert!(UiEvent::UploadCancelled.is_upload_event());
        assert!(!UiEvent::FadeIn.is_upload_event());
    }
}
