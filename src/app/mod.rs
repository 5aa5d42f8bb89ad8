// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced event loop.
//!
//! `App` owns the customizer core and the presentation state fed by its
//! events. Jobs scheduled by the core run as Iced tasks (see [`runtime`])
//! and report back through [`Message`].

mod message;
pub mod paths;
mod runtime;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::customizer::Customizer;
use crate::application::port::ImageDecoder;
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::i18n::I18n;
use crate::infrastructure::{ImageRsDecoder, NamingConventionResolver};
use crate::ui::customizer::Presentation;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 820;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    customizer: Customizer,
    presentation: Presentation,
    notifications: notifications::Manager,
    decoder: Arc<dyn ImageDecoder>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_color", self.customizer.current_color())
            .field("transitioning", &self.customizer.is_transitioning())
            .field("pending_upload", &self.customizer.pending_upload().map(|u| u.id()))
            .finish()
    }
}

/// Everything resolved before the window opens.
struct Boot {
    lang: Option<String>,
    config: Config,
    customizer: Customizer,
    /// i18n keys of warnings to show once the window is up.
    warnings: Vec<String>,
}

impl Boot {
    /// Loads settings and builds the customizer. An invalid palette falls
    /// back to the defaults with a warning.
    fn prepare(flags: Flags) -> Result<Self> {
        let (config, config_warning) = config::load();
        let assets_dir = paths::resolve_assets_dir(&config.theme.assets_dir);
        let mut warnings: Vec<String> = config_warning.into_iter().collect();

        let customizer = match new_customizer(&config, &assets_dir) {
            Ok(customizer) => customizer,
            Err(err) => {
                tracing::warn!(%err, "invalid customizer settings, using defaults");
                warnings.push("notification-palette-error".to_string());
                new_customizer(&Config::default(), &assets_dir)?
            }
        };

        tracing::info!(
            assets_dir = %assets_dir.display(),
            colors = customizer.palette().len(),
            initial = %customizer.current_color(),
            "customizer ready"
        );

        Ok(Self {
            lang: flags.lang,
            config,
            customizer,
            warnings,
        })
    }
}

fn new_customizer(config: &Config, assets_dir: &Path) -> Result<Customizer> {
    let settings = config.customizer_settings()?;
    let resolver = NamingConventionResolver::new(PathBuf::from(assets_dir));
    Customizer::new(settings, Box::new(resolver)).map_err(Error::from)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if neither the configured nor the default settings yield
/// a usable customizer, or if the window cannot be created.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());
    let boot = Boot::prepare(flags)?;

    // iced 0.14 requires a `Fn` boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some(boot));
    let boot = move || {
        let boot = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(boot)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(Error::from)
}

impl App {
    /// Builds the window state and requests the initial product image.
    fn new(boot: Boot) -> (Self, Task<Message>) {
        let Boot {
            lang,
            config,
            customizer,
            warnings,
        } = boot;

        let i18n = I18n::new(lang, &config);
        let mut notifications = notifications::Manager::new();
        for key in warnings {
            notifications.push(Notification::warning(key));
        }

        let initial_asset = customizer.initial_asset();
        let presentation = Presentation::new(
            customizer.current_color().clone(),
            initial_asset.clone(),
            customizer.fade_delay(),
        );
        let decoder: Arc<dyn ImageDecoder> = Arc::new(ImageRsDecoder::new());
        let task = runtime::load_asset(None, initial_asset, Arc::clone(&decoder));

        let app = Self {
            i18n,
            customizer,
            presentation,
            notifications,
            decoder,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        theming::page_theme(self.presentation.selected())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            customizer: &mut self.customizer,
            presentation: &mut self.presentation,
            notifications: &mut self.notifications,
            decoder: &self.decoder,
        };
        update::handle_message(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            customizer: &self.customizer,
            presentation: &self.presentation,
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(&self.presentation, &self.notifications)
    }
}
