// SPDX-License-Identifier: MPL-2.0
//! Color transition state machine.
//!
//! A transition runs `select → fade out → (fade delay) → swap asset → load →
//! fade in`. The selection indicator moves immediately, but
//! `UiState::current_color` only commits once the asset has loaded or failed
//! to load, so it always reflects the settled color.
//!
//! A newer selection supersedes the running transition. Callbacks carry the
//! [`TransitionId`] of the transition that scheduled them and are dropped if
//! that id is no longer the active one.

use super::outbox::{Job, Outbox};
use super::state::UiState;
use crate::application::port::{AssetResolver, UiEvent};
use crate::domain::color::{AssetReference, ColorId, Palette};
use crate::domain::error::{AssetLoadError, PaletteError};
use std::fmt;
use std::time::Duration;

/// Sequence number of a color transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

/// Where a running transition is waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Waiting for the fade delay before swapping the asset.
    FadingOut,
    /// Waiting for the swapped asset to load.
    Loading,
}

#[derive(Debug, Clone)]
struct Transition {
    id: TransitionId,
    target: ColorId,
    phase: TransitionPhase,
}

/// Owns the lifecycle of color changes.
#[derive(Debug)]
pub struct ThemeTransitionController {
    palette: Palette,
    resolver: Box<dyn AssetResolver>,
    fade_delay: Duration,
    active: Option<Transition>,
    last_id: u64,
}

impl ThemeTransitionController {
    #[must_use]
    pub fn new(palette: Palette, resolver: Box<dyn AssetResolver>, fade_delay: Duration) -> Self {
        Self {
            palette,
            resolver,
            fade_delay,
            active: None,
            last_id: 0,
        }
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The color the indicator shows: the in-flight target, or the settled
    /// color when idle.
    #[must_use]
    pub fn selected<'a>(&'a self, state: &'a UiState) -> &'a ColorId {
        self.active
            .as_ref()
            .map_or(&state.current_color, |transition| &transition.target)
    }

    #[must_use]
    pub fn fade_delay(&self) -> Duration {
        self.fade_delay
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Phase of the running transition, if any.
    #[must_use]
    pub fn phase(&self) -> Option<TransitionPhase> {
        self.active.as_ref().map(|transition| transition.phase)
    }

    /// Asset of the settled color, used to show the product on startup.
    #[must_use]
    pub fn initial_asset(&self, state: &UiState) -> AssetReference {
        self.resolver.resolve(&state.current_color)
    }

    /// Starts a transition to `color`.
    ///
    /// Selecting the already selected color does nothing. Emits
    /// `TransitionStart`, `ActiveColorChanged` and `FadeOut`, then schedules
    /// a [`Job::SwapAsset`] after the fade delay.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::UnknownColor`] if `color` is not in the palette.
    pub fn select_color(
        &mut self,
        state: &UiState,
        color: &ColorId,
        out: &mut Outbox,
    ) -> Result<(), PaletteError> {
        if !self.palette.contains(color) {
            return Err(PaletteError::UnknownColor(color.to_string()));
        }

        if self.selected(state) == color {
            tracing::debug!(%color, "color already selected");
            return Ok(());
        }

        self.last_id += 1;
        let id = TransitionId::new(self.last_id);
        let superseded = self.active.replace(Transition {
            id,
            target: color.clone(),
            phase: TransitionPhase::FadingOut,
        });

        if let Some(previous) = superseded {
            tracing::debug!(previous = %previous.id, target = %previous.target, "transition superseded");
        }
        tracing::info!(transition = %id, from = %state.current_color, to = %color, "color transition started");

        out.emit(UiEvent::TransitionStart);
        out.emit(UiEvent::ActiveColorChanged {
            color: color.clone(),
        });
        out.emit(UiEvent::FadeOut);
        out.schedule(Job::SwapAsset {
            transition: id,
            delay: self.fade_delay,
        });

        Ok(())
    }

    /// Fade delay elapsed: point the product image at the new asset.
    pub fn on_swap_elapsed(&mut self, transition: TransitionId, out: &mut Outbox) {
        let Some(active) = self.active.as_mut().filter(|active| {
            active.id == transition && active.phase == TransitionPhase::FadingOut
        }) else {
            tracing::debug!(%transition, "dropping stale asset swap");
            return;
        };

        let asset = self.resolver.resolve(&active.target);
        active.phase = TransitionPhase::Loading;

        out.emit(UiEvent::AssetSwapped {
            color: active.target.clone(),
            asset: asset.clone(),
        });
        out.schedule(Job::LoadAsset { transition, asset });
    }

    /// The swapped asset is ready to display.
    pub fn on_asset_ready(&mut self, state: &mut UiState, transition: TransitionId, out: &mut Outbox) {
        self.finish(state, transition, None, out);
    }

    /// The swapped asset failed to load. The selection stands and the
    /// transition still settles so the loading indicator turns off.
    pub fn on_asset_error(
        &mut self,
        state: &mut UiState,
        transition: TransitionId,
        error: &AssetLoadError,
        out: &mut Outbox,
    ) {
        self.finish(state, transition, Some(error), out);
    }

    fn finish(
        &mut self,
        state: &mut UiState,
        transition: TransitionId,
        error: Option<&AssetLoadError>,
        out: &mut Outbox,
    ) {
        let is_current = self.active.as_ref().is_some_and(|active| {
            active.id == transition && active.phase == TransitionPhase::Loading
        });
        let Some(settled) = self.active.take_if(|_| is_current) else {
            tracing::debug!(%transition, "dropping stale asset load result");
            return;
        };

        if let Some(error) = error {
            tracing::error!(%transition, %error, "failed to load product image");
        }

        out.emit(UiEvent::FadeIn);
        out.emit(UiEvent::TransitionEnd);
        tracing::info!(%transition, color = %settled.target, "color transition settled");
        state.current_color = settled.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[derive(Debug)]
    struct DirResolver;

    impl AssetResolver for DirResolver {
        fn resolve(&self, color: &ColorId) -> AssetReference {
            AssetReference::new(PathBuf::from(format!("{}.png", color.capitalized())))
        }
    }

    fn setup() -> (ThemeTransitionController, UiState, Outbox) {
        let palette = Palette::new(["blue", "red", "yellow"]).unwrap();
        (
            ThemeTransitionController::new(palette, Box::new(DirResolver), Duration::from_millis(500)),
            UiState::new(ColorId::new("blue")),
            Outbox::new(),
        )
    }

    fn swap_id(jobs: &[Job]) -> TransitionId {
        match jobs {
            [Job::SwapAsset { transition, .. }] => *transition,
            other => panic!("expected a single swap job, got {other:?}"),
        }
    }

    #[test]
    fn selecting_current_color_is_a_no_op() {
        let (mut theme, state, mut out) = setup();
        theme.select_color(&state, &"blue".into(), &mut out).unwrap();
        assert!(out.is_empty());
        assert!(!theme.is_transitioning());
    }

    #[test]
    fn unknown_color_is_rejected() {
        let (mut theme, state, mut out) = setup();
        let err = theme.select_color(&state, &"green".into(), &mut out).unwrap_err();
        assert_eq!(err, PaletteError::UnknownColor("green".into()));
        assert!(out.is_empty());
    }

    #[test]
    fn full_transition_commits_after_load() {
        let (mut theme, mut state, mut out) = setup();
        let mut events: Vec<UiEvent> = Vec::new();

        theme.select_color(&state, &"red".into(), &mut out).unwrap();
        let id = swap_id(&out.flush(&mut events));
        assert_eq!(
            events,
            vec![
                UiEvent::TransitionStart,
                UiEvent::ActiveColorChanged { color: "red".into() },
                UiEvent::FadeOut,
            ]
        );
        assert_eq!(state.current_color().as_str(), "blue");
        assert_eq!(theme.selected(&state).as_str(), "red");

        theme.on_swap_elapsed(id, &mut out);
        let jobs = out.flush(&mut events);
        assert!(matches!(
            jobs.as_slice(),
            [Job::LoadAsset { asset, .. }] if asset.path() == PathBuf::from("Red.png")
        ));
        assert_eq!(theme.phase(), Some(TransitionPhase::Loading));
        assert_eq!(state.current_color().as_str(), "blue");

        theme.on_asset_ready(&mut state, id, &mut out);
        let _ = out.flush(&mut events);
        assert_eq!(
            &events[events.len() - 2..],
            &[UiEvent::FadeIn, UiEvent::TransitionEnd]
        );
        assert_eq!(state.current_color().as_str(), "red");
        assert!(!theme.is_transitioning());
    }

    #[test]
    fn asset_error_still_settles() {
        let (mut theme, mut state, mut out) = setup();
        theme.select_color(&state, &"yellow".into(), &mut out).unwrap();
        let id = swap_id(&out.flush(&mut Vec::<UiEvent>::new()));
        theme.on_swap_elapsed(id, &mut out);
        let _ = out.flush(&mut Vec::<UiEvent>::new());

        let error = AssetLoadError::new("Yellow.png", "not found");
        theme.on_asset_error(&mut state, id, &error, &mut out);

        assert_eq!(
            out.take_events(),
            vec![UiEvent::FadeIn, UiEvent::TransitionEnd]
        );
        assert_eq!(state.current_color().as_str(), "yellow");
    }

    #[test]
    fn newer_selection_supersedes_older() {
        let (mut theme, mut state, mut out) = setup();
        theme.select_color(&state, &"red".into(), &mut out).unwrap();
        let first = swap_id(&out.flush(&mut Vec::<UiEvent>::new()));
        theme.on_swap_elapsed(first, &mut out);
        let _ = out.flush(&mut Vec::<UiEvent>::new());

        theme.select_color(&state, &"yellow".into(), &mut out).unwrap();
        let second = swap_id(&out.flush(&mut Vec::<UiEvent>::new()));

        theme.on_asset_ready(&mut state, first, &mut out);
        theme.on_swap_elapsed(first, &mut out);
        assert!(out.is_empty());
        assert_eq!(state.current_color().as_str(), "blue");
        assert_eq!(theme.selected(&state).as_str(), "yellow");

        theme.on_swap_elapsed(second, &mut out);
        theme.on_asset_ready(&mut state, second, &mut out);
        assert_eq!(state.current_color().as_str(), "yellow");
    }

    #[test]
    fn reselecting_settled_color_mid_transition_returns_to_it() {
        let (mut theme, mut state, mut out) = setup();
        theme.select_color(&state, &"red".into(), &mut out).unwrap();
        let _ = out.flush(&mut Vec::<UiEvent>::new());

        theme.select_color(&state, &"blue".into(), &mut out).unwrap();
        let mut events: Vec<UiEvent> = Vec::new();
        let id = swap_id(&out.flush(&mut events));
        assert!(events.contains(&UiEvent::ActiveColorChanged { color: "blue".into() }));

        theme.on_swap_elapsed(id, &mut out);
        theme.on_asset_ready(&mut state, id, &mut out);
        assert_eq!(state.current_color().as_str(), "blue");
    }

    #[test]
    fn ready_before_swap_is_ignored() {
        let (mut theme, mut state, mut out) = setup();
        theme.select_color(&state, &"red".into(), &mut out).unwrap();
        let id = swap_id(&out.flush(&mut Vec::<UiEvent>::new()));

        theme.on_asset_ready(&mut state, id, &mut out);
        assert!(out.is_empty());
        assert!(theme.is_transitioning());
    }
}
