// SPDX-License-Identifier: MPL-2.0
//! Turns jobs scheduled by the customizer core into Iced tasks.
//!
//! Decoding runs on the blocking pool; delays are tokio timers. Tasks are
//! never aborted: a result that arrives after its operation was superseded
//! is discarded by the core's id check.

use super::Message;
use crate::application::customizer::{Job, TransitionId};
use crate::application::port::ImageDecoder;
use crate::domain::color::AssetReference;
use crate::domain::error::{AssetLoadError, DecodeError};
use crate::domain::media::RawImage;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Spawns the task that performs `job`.
pub(super) fn perform(job: Job, decoder: Arc<dyn ImageDecoder>) -> Task<Message> {
    match job {
        Job::Decode { upload, file } => {
            let path = file.path().to_path_buf();
            Task::perform(decode(decoder, path), move |result| {
                Message::DecodeFinished { upload, result }
            })
        }
        Job::Settle {
            upload,
            image,
            delay,
        } => Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                image
            },
            move |image| Message::SettleElapsed { upload, image },
        ),
        Job::SwapAsset { transition, delay } => Task::perform(
            tokio::time::sleep(delay),
            move |()| Message::SwapElapsed(transition),
        ),
        Job::LoadAsset { transition, asset } => load_asset(Some(transition), asset, decoder),
    }
}

/// Loads a product image, reporting to `transition` when there is one.
pub(super) fn load_asset(
    transition: Option<TransitionId>,
    asset: AssetReference,
    decoder: Arc<dyn ImageDecoder>,
) -> Task<Message> {
    let path = asset.path().to_path_buf();
    let name = asset.to_string();

    Task::perform(decode(decoder, path), move |result| Message::AssetLoaded {
        transition,
        result: result.map_err(|err| AssetLoadError::new(name, err.to_string())),
        asset,
    })
}

async fn decode(decoder: Arc<dyn ImageDecoder>, path: PathBuf) -> Result<RawImage, DecodeError> {
    tokio::task::spawn_blocking(move || decoder.decode(&path))
        .await
        .unwrap_or_else(|err| Err(DecodeError::Io(format!("decode task failed: {err}"))))
}
