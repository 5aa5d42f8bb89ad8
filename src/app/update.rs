// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every handler forwards user input or job results to the customizer core,
//! then drains the core: buffered events go to the presentation state and
//! scheduled jobs become tasks.

use super::{runtime, Message};
use crate::application::customizer::{Customizer, Job, TransitionId};
use crate::application::port::{ImageDecoder, PresentationSink, UiEvent};
use crate::domain::color::AssetReference;
use crate::domain::error::{AssetLoadError, DecodeError};
use crate::domain::media::RawImage;
use crate::domain::upload::{FileDescriptor, UploadId, UploadPolicy};
use crate::i18n::I18n;
use crate::infrastructure::probe_file;
use crate::ui::customizer::{self, Presentation};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::sync::Arc;

/// Mutable application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub customizer: &'a mut Customizer,
    pub presentation: &'a mut Presentation,
    pub notifications: &'a mut notifications::Manager,
    pub decoder: &'a Arc<dyn ImageDecoder>,
}

/// Routes core events to the presentation and raises toasts for failures.
struct ShellSink<'a> {
    presentation: &'a mut Presentation,
    notifications: &'a mut notifications::Manager,
}

impl PresentationSink for ShellSink<'_> {
    fn present(&mut self, event: UiEvent) {
        if let UiEvent::UploadFailed { file_name, reason } = &event {
            tracing::warn!(%file_name, %reason, "logo upload failed");
            self.notifications
                .push(Notification::error("notification-upload-failed").with_arg("file", file_name));
        }
        self.presentation.present(event);
    }
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Customizer(message) => handle_customizer_message(ctx, message),
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::FilePicked(picked) => handle_file_picked(ctx, picked),
        Message::DecodeFinished { upload, result } => handle_decode_finished(ctx, upload, result),
        Message::SettleElapsed { upload, image } => {
            ctx.customizer.on_settle_elapsed(upload, image);
            drain(ctx)
        }
        Message::SwapElapsed(transition) => {
            ctx.customizer.on_swap_elapsed(transition);
            drain(ctx)
        }
        Message::AssetLoaded {
            transition,
            asset,
            result,
        } => handle_asset_loaded(ctx, transition, asset, result),
        Message::Tick(now) => {
            ctx.notifications.tick(now);
            Task::none()
        }
    }
}

fn handle_customizer_message(
    ctx: &mut UpdateContext<'_>,
    message: customizer::Message,
) -> Task<Message> {
    match message {
        customizer::Message::SelectColor(color) => {
            if let Err(err) = ctx.customizer.select_color(&color) {
                tracing::warn!(%err, "ignoring color selection");
                return Task::none();
            }
            drain(ctx)
        }
        customizer::Message::OpenFileDialog => {
            open_file_dialog(ctx.i18n.tr("upload-dialog-filter"), ctx.customizer.upload_policy())
        }
        customizer::Message::CancelUpload => {
            if ctx.customizer.cancel_upload() {
                ctx.notifications
                    .push(Notification::info("notification-upload-cancelled"));
            }
            drain(ctx)
        }
    }
}

fn open_file_dialog(filter_label: String, policy: &UploadPolicy) -> Task<Message> {
    let extensions = dialog_extensions(policy);

    Task::perform(
        async move {
            let handle = rfd::AsyncFileDialog::new()
                .add_filter(filter_label, extensions.as_slice())
                .add_filter("*", &["*"])
                .pick_file()
                .await?;
            Some(probe_file(handle.path()).map_err(|err| err.to_string()))
        },
        Message::FilePicked,
    )
}

/// File extensions offered by the picker for the accepted MIME types.
fn dialog_extensions(policy: &UploadPolicy) -> Vec<&'static str> {
    let mut extensions = Vec::new();
    for mime_type in &policy.allowed_mime_types {
        let matching: &[&'static str] = match mime_type.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => &["jpg", "jpeg"],
            "image/png" => &["png"],
            "image/gif" => &["gif"],
            "image/webp" => &["webp"],
            "image/bmp" => &["bmp"],
            _ => &[],
        };
        for extension in matching {
            if !extensions.contains(extension) {
                extensions.push(*extension);
            }
        }
    }
    extensions
}

fn handle_file_picked(
    ctx: &mut UpdateContext<'_>,
    picked: Option<Result<FileDescriptor, String>>,
) -> Task<Message> {
    let file = match picked {
        None => return Task::none(),
        Some(Err(reason)) => {
            tracing::warn!(%reason, "could not read selected file");
            ctx.notifications
                .push(Notification::error("notification-file-read-error"));
            return Task::none();
        }
        Some(Ok(file)) => file,
    };

    match ctx.customizer.submit_file(file) {
        Ok(_) => ctx.notifications.clear_upload_errors(),
        Err(err) => {
            tracing::info!(%err, "logo rejected");
            ctx.notifications.push(Notification::warning(err.i18n_key()));
        }
    }
    drain(ctx)
}

fn handle_decode_finished(
    ctx: &mut UpdateContext<'_>,
    upload: UploadId,
    result: Result<RawImage, DecodeError>,
) -> Task<Message> {
    match result {
        Ok(image) => ctx.customizer.on_decode_complete(upload, image),
        Err(err) => ctx.customizer.on_decode_error(upload, &err),
    }
    drain(ctx)
}

fn handle_asset_loaded(
    ctx: &mut UpdateContext<'_>,
    transition: Option<TransitionId>,
    asset: AssetReference,
    result: Result<RawImage, AssetLoadError>,
) -> Task<Message> {
    ctx.presentation
        .store_asset(asset.clone(), result.as_ref().ok());

    if let Err(err) = &result {
        if ctx.presentation.displayed_asset() == Some(&asset) {
            tracing::error!(%err, "product image unavailable");
            ctx.notifications.push(
                Notification::error("notification-asset-load-error")
                    .with_arg("asset", asset.to_string()),
            );
        }
    }

    if let Some(transition) = transition {
        match &result {
            Ok(_) => ctx.customizer.on_asset_ready(transition),
            Err(err) => ctx.customizer.on_asset_error(transition, err),
        }
    }
    drain(ctx)
}

/// Delivers buffered core events and turns the scheduled jobs into tasks.
///
/// Assets already decoded are reported ready without a round trip, which can
/// buffer further events, so the core is flushed until it schedules nothing.
pub fn drain(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut tasks = Vec::new();

    loop {
        let jobs = ctx.customizer.flush(&mut ShellSink {
            presentation: &mut *ctx.presentation,
            notifications: &mut *ctx.notifications,
        });
        if jobs.is_empty() {
            break;
        }

        for job in jobs {
            match job {
                Job::LoadAsset { transition, asset } if ctx.presentation.is_cached(&asset) => {
                    ctx.customizer.on_asset_ready(transition);
                }
                job => tasks.push(runtime::perform(job, Arc::clone(ctx.decoder))),
            }
        }
    }

    Task::batch(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn dialog_extensions_follow_policy() {
        let policy = UploadPolicy {
            allowed_mime_types: vec![
                "image/jpeg".into(),
                "image/jpg".into(),
                "IMAGE/PNG".into(),
                "text/plain".into(),
            ],
            max_size_bytes: 1,
            settle_delay: Duration::ZERO,
        };
        assert_eq!(dialog_extensions(&policy), vec!["jpg", "jpeg", "png"]);
    }
}
