// SPDX-License-Identifier: MPL-2.0
//! The customizer core: upload and color-transition state machines sharing
//! one [`UiState`].
//!
//! The core is sans-IO. Operations buffer [`UiEvent`]s and [`Job`]s in an
//! [`Outbox`]; the caller delivers them with [`Customizer::flush`], runs each
//! job, and reports the outcome through the matching `on_*` method. Every
//! callback re-checks that its operation is still current before writing, so
//! late results from superseded or cancelled work are silently dropped.
//!
//! # Example
//!
//! ```
//! use canopy::application::customizer::{Customizer, CustomizerSettings, Job};
//! use canopy::application::port::UiEvent;
//! use canopy::domain::color::Palette;
//! use canopy::domain::upload::UploadPolicy;
//! use canopy::infrastructure::NamingConventionResolver;
//! use std::time::Duration;
//!
//! let settings = CustomizerSettings {
//!     palette: Palette::new(["blue", "red"]).unwrap(),
//!     initial_color: None,
//!     upload_policy: UploadPolicy {
//!         allowed_mime_types: vec!["image/png".into()],
//!         max_size_bytes: 1024,
//!         settle_delay: Duration::from_millis(10),
//!     },
//!     fade_delay: Duration::from_millis(5),
//! };
//! let mut customizer =
//!     Customizer::new(settings, Box::new(NamingConventionResolver::new("images"))).unwrap();
//!
//! customizer.select_color(&"red".into()).unwrap();
//!
//! let mut events: Vec<UiEvent> = Vec::new();
//! let jobs = customizer.flush(&mut events);
//! assert_eq!(events[0], UiEvent::TransitionStart);
//! assert!(matches!(jobs[0], Job::SwapAsset { .. }));
//! assert_eq!(customizer.current_color().as_str(), "blue");
//! ```

mod outbox;
mod state;
mod theme;
mod upload;

pub use outbox::{Job, Outbox};
pub use state::UiState;
pub use theme::{ThemeTransitionController, TransitionId, TransitionPhase};
pub use upload::UploadController;

use crate::application::port::{AssetResolver, PresentationSink, UiEvent};
use crate::domain::color::{AssetReference, ColorId, Palette};
use crate::domain::error::{AssetLoadError, DecodeError, PaletteError, ValidationError};
use crate::domain::media::RawImage;
use crate::domain::upload::{FileDescriptor, UploadHandle, UploadId, UploadPolicy};
use std::time::Duration;

/// Everything needed to build a [`Customizer`] besides the asset resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizerSettings {
    pub palette: Palette,
    /// Starting color; the first palette entry when `None`.
    pub initial_color: Option<ColorId>,
    pub upload_policy: UploadPolicy,
    pub fade_delay: Duration,
}

/// One customizer widget instance.
#[derive(Debug)]
pub struct Customizer {
    state: UiState,
    uploads: UploadController,
    theme: ThemeTransitionController,
    outbox: Outbox,
}

impl Customizer {
    /// Creates a customizer settled on the initial color with no upload.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownColor`] if the initial color is not in
    /// the palette.
    pub fn new(
        settings: CustomizerSettings,
        resolver: Box<dyn AssetResolver>,
    ) -> Result<Self, PaletteError> {
        let initial = match settings.initial_color {
            Some(color) if settings.palette.contains(&color) => color,
            Some(color) => return Err(PaletteError::UnknownColor(color.to_string())),
            None => settings.palette.first().clone(),
        };

        Ok(Self {
            state: UiState::new(initial),
            uploads: UploadController::new(settings.upload_policy),
            theme: ThemeTransitionController::new(settings.palette, resolver, settings.fade_delay),
            outbox: Outbox::new(),
        })
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn state(&self) -> &UiState {
        &self.state
    }

    #[must_use]
    pub fn current_color(&self) -> &ColorId {
        self.state.current_color()
    }

    /// Color shown by the selection indicator.
    #[must_use]
    pub fn selected_color(&self) -> &ColorId {
        self.theme.selected(&self.state)
    }

    #[must_use]
    pub fn pending_upload(&self) -> Option<&UploadHandle> {
        self.state.pending_upload()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.theme.is_transitioning()
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        self.theme.palette()
    }

    /// Time the product stays faded out before the asset swap.
    #[must_use]
    pub fn fade_delay(&self) -> Duration {
        self.theme.fade_delay()
    }

    #[must_use]
    pub fn upload_policy(&self) -> &UploadPolicy {
        self.uploads.policy()
    }

    #[must_use]
    pub fn initial_asset(&self) -> AssetReference {
        self.theme.initial_asset(&self.state)
    }

    // ---------------------------------------------------------------------
    // Uploads
    // ---------------------------------------------------------------------

    /// See [`UploadController::submit_file`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the file is rejected.
    pub fn submit_file(&mut self, file: FileDescriptor) -> Result<UploadHandle, ValidationError> {
        self.uploads
            .submit_file(&mut self.state, file, &mut self.outbox)
    }

    /// Cancels the pending upload. Returns `false` if nothing was pending.
    pub fn cancel_upload(&mut self) -> bool {
        self.uploads.cancel(&mut self.state, &mut self.outbox)
    }

    pub fn on_decode_complete(&mut self, upload: UploadId, image: RawImage) {
        self.uploads
            .on_decode_complete(&self.state, upload, image, &mut self.outbox);
    }

    pub fn on_decode_error(&mut self, upload: UploadId, error: &DecodeError) {
        self.uploads
            .on_decode_error(&mut self.state, upload, error, &mut self.outbox);
    }

    pub fn on_settle_elapsed(&mut self, upload: UploadId, image: RawImage) {
        self.uploads
            .on_settle_elapsed(&mut self.state, upload, image, &mut self.outbox);
    }

    // ---------------------------------------------------------------------
    // Color transitions
    // ---------------------------------------------------------------------

    /// See [`ThemeTransitionController::select_color`].
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownColor`] for colors outside the palette.
    pub fn select_color(&mut self, color: &ColorId) -> Result<(), PaletteError> {
        self.theme
            .select_color(&self.state, color, &mut self.outbox)
    }

    pub fn on_swap_elapsed(&mut self, transition: TransitionId) {
        self.theme.on_swap_elapsed(transition, &mut self.outbox);
    }

    pub fn on_asset_ready(&mut self, transition: TransitionId) {
        self.theme
            .on_asset_ready(&mut self.state, transition, &mut self.outbox);
    }

    pub fn on_asset_error(&mut self, transition: TransitionId, error: &AssetLoadError) {
        self.theme
            .on_asset_error(&mut self.state, transition, error, &mut self.outbox);
    }

    // ---------------------------------------------------------------------
    // Delivery
    // ---------------------------------------------------------------------

    /// Delivers buffered events to `sink` and returns the jobs to run.
    pub fn flush(&mut self, sink: &mut impl PresentationSink) -> Vec<Job> {
        self.outbox.flush(sink)
    }

    /// Returns buffered events, leaving jobs in place.
    pub fn take_events(&mut self) -> Vec<UiEvent> {
        self.outbox.take_events()
    }
}
