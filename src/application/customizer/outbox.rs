// SPDX-License-Identifier: MPL-2.0
//! Events and scheduled work produced by the state machines.

use super::theme::TransitionId;
use crate::application::port::{PresentationSink, UiEvent};
use crate::domain::color::AssetReference;
use crate::domain::media::RawImage;
use crate::domain::upload::{FileDescriptor, UploadId};
use std::time::Duration;

/// Asynchronous work the shell must perform and report back.
///
/// Every job carries the sequence number of the operation that scheduled it;
/// its result is routed back through the matching `on_*` callback, which
/// drops it if that operation is no longer current.
#[derive(Debug, Clone)]
pub enum Job {
    /// Read and decode the uploaded file.
    /// Report with `on_decode_complete` or `on_decode_error`.
    Decode { upload: UploadId, file: FileDescriptor },
    /// Wait `delay`, then report with `on_settle_elapsed`.
    Settle {
        upload: UploadId,
        image: RawImage,
        delay: Duration,
    },
    /// Wait `delay`, then report with `on_swap_elapsed`.
    SwapAsset {
        transition: TransitionId,
        delay: Duration,
    },
    /// Load the product asset.
    /// Report with `on_asset_ready` or `on_asset_error`.
    LoadAsset {
        transition: TransitionId,
        asset: AssetReference,
    },
}

/// Buffer of events and jobs awaiting delivery.
#[derive(Debug, Default)]
pub struct Outbox {
    events: Vec<UiEvent>,
    jobs: Vec<Job>,
}

impl Outbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    pub fn schedule(&mut self, job: Job) {
        self.jobs.push(job);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.jobs.is_empty()
    }

    /// Delivers buffered events to `sink` in emission order and hands back
    /// the buffered jobs.
    pub fn flush(&mut self, sink: &mut impl PresentationSink) -> Vec<Job> {
        for event in self.events.drain(..) {
            sink.present(event);
        }
        std::mem::take(&mut self.jobs)
    }

    /// Removes and returns buffered events without a sink.
    pub fn take_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }
}
