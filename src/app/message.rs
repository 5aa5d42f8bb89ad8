// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::customizer::TransitionId;
use crate::domain::color::AssetReference;
use crate::domain::error::{AssetLoadError, DecodeError};
use crate::domain::media::RawImage;
use crate::domain::upload::{FileDescriptor, UploadId};
use crate::ui::customizer;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
///
/// Besides UI input, every asynchronous job reports back through one of
/// these variants, tagged with the id of the operation that started it.
#[derive(Debug, Clone)]
pub enum Message {
    Customizer(customizer::Message),
    Notification(notifications::NotificationMessage),
    /// The file dialog closed. `None` when the user dismissed it.
    FilePicked(Option<Result<FileDescriptor, String>>),
    DecodeFinished {
        upload: UploadId,
        result: Result<RawImage, DecodeError>,
    },
    SettleElapsed {
        upload: UploadId,
        image: RawImage,
    },
    SwapElapsed(TransitionId),
    /// A product image finished loading. `transition` is `None` for the
    /// image requested at startup.
    AssetLoaded {
        transition: Option<TransitionId>,
        asset: AssetReference,
        result: Result<RawImage, AssetLoadError>,
    },
    /// Periodic tick for animations and toast expiry.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CANOPY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory holding the `<Color>.png` product images.
    pub assets_dir: Option<String>,
}
