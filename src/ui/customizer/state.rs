// SPDX-License-Identifier: MPL-2.0
//! What the customizer window currently shows, driven by core events.

use super::fade::Fade;
use crate::application::port::{PresentationSink, UiEvent};
use crate::domain::color::{AssetReference, ColorId};
use crate::domain::media::RawImage;
use crate::ui::design_tokens::opacity;
use iced::widget::image;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Upload button state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadDisplay {
    /// File input is cleared and the button accepts a new pick.
    Idle,
    /// A file is being read; the button shows the busy label.
    Processing { file_name: String },
}

/// The last logo an upload committed. Only a completed upload replaces it.
#[derive(Debug, Clone)]
pub struct Logo {
    pub file_name: String,
    pub handle: image::Handle,
}

/// Decoded product image, or the fact that it failed to load.
#[derive(Debug, Clone)]
pub enum AssetSlot {
    Loaded(image::Handle),
    Missing,
}

/// Presentation state fed by [`UiEvent`]s.
#[derive(Debug)]
pub struct Presentation {
    selected: ColorId,
    displayed_asset: Option<AssetReference>,
    assets: HashMap<AssetReference, AssetSlot>,
    product_fade: Fade,
    fade_duration: Duration,
    loading: bool,
    upload: UploadDisplay,
    logo: Option<Logo>,
}

impl Presentation {
    #[must_use]
    pub fn new(selected: ColorId, initial_asset: AssetReference, fade_duration: Duration) -> Self {
        Self {
            selected,
            displayed_asset: Some(initial_asset),
            assets: HashMap::new(),
            product_fade: Fade::visible(Instant::now()),
            fade_duration,
            loading: false,
            upload: UploadDisplay::Idle,
            logo: None,
        }
    }

    /// Applies `event` as of `now`.
    pub fn apply(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::UploadStarted { file_name } => {
                self.upload = UploadDisplay::Processing { file_name };
            }
            UiEvent::UploadCompleted { preview } => {
                self.upload = UploadDisplay::Idle;
                self.logo = Some(Logo {
                    handle: handle_from_raw(&preview.image),
                    file_name: preview.file_name,
                });
            }
            UiEvent::UploadFailed { .. } | UiEvent::UploadCancelled => {
                self.upload = UploadDisplay::Idle;
            }
            UiEvent::TransitionStart => self.loading = true,
            UiEvent::ActiveColorChanged { color } => self.selected = color,
            UiEvent::FadeOut => {
                self.product_fade
                    .retarget(opacity::TRANSPARENT, self.fade_duration, now);
            }
            UiEvent::AssetSwapped { asset, .. } => self.displayed_asset = Some(asset),
            UiEvent::FadeIn => {
                self.product_fade
                    .retarget(opacity::OPAQUE, self.fade_duration, now);
            }
            UiEvent::TransitionEnd => self.loading = false,
        }
    }

    /// Records the outcome of loading `asset`.
    pub fn store_asset(&mut self, asset: AssetReference, image: Option<&RawImage>) {
        let slot = image.map_or(AssetSlot::Missing, |image| {
            AssetSlot::Loaded(handle_from_raw(image))
        });
        self.assets.insert(asset, slot);
    }

    #[must_use]
    pub fn is_cached(&self, asset: &AssetReference) -> bool {
        matches!(self.assets.get(asset), Some(AssetSlot::Loaded(_)))
    }

    #[must_use]
    pub fn selected(&self) -> &ColorId {
        &self.selected
    }

    #[must_use]
    pub fn displayed_asset(&self) -> Option<&AssetReference> {
        self.displayed_asset.as_ref()
    }

    /// The slot for the asset on screen, `None` while it is still loading.
    #[must_use]
    pub fn product_image(&self) -> Option<&AssetSlot> {
        self.displayed_asset
            .as_ref()
            .and_then(|asset| self.assets.get(asset))
    }

    #[must_use]
    pub fn product_opacity(&self, now: Instant) -> f32 {
        self.product_fade.value_at(now)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn upload(&self) -> &UploadDisplay {
        &self.upload
    }

    /// Logo drawn over the product, kept across later cancelled or failed uploads.
    #[must_use]
    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    /// Whether the view needs animation frames at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.product_fade.is_animating(now)
    }
}

impl PresentationSink for Presentation {
    fn present(&mut self, event: UiEvent) {
        self.apply(event, Instant::now());
    }
}

fn handle_from_raw(image: &RawImage) -> image::Handle {
    image::Handle::from_rgba(image.width(), image.height(), image.to_rgba_vec())
}
