// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[upload]` - Accepted logo types, size limit, settle delay
//! - `[theme]` - Palette, initial color, fade delay, asset directory
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `CANOPY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use canopy::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::customizer::CustomizerSettings;
use crate::domain::color::{ColorId, Palette};
use crate::domain::upload::UploadPolicy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Logo upload settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Accepted MIME types.
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,

    /// Largest accepted file in bytes.
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: u64,

    /// Delay between decode and preview, in milliseconds.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_mime_types: default_allowed_mime_types(),
            max_size_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

/// Color palette and transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Selectable colors, in swatch order.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Color shown at startup. Defaults to the first palette entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_color: Option<String>,

    /// Fade-out time before the asset swap, in milliseconds.
    #[serde(default = "default_fade_delay_ms")]
    pub fade_delay_ms: u64,

    /// Directory containing the `<Color>.png` product images.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            initial_color: None,
            fade_delay_ms: DEFAULT_FADE_DELAY_MS,
            assets_dir: default_assets_dir(),
        }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Builds the state machine settings, clamping delays to sane bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Palette`] if the palette is empty or has duplicates.
    pub fn customizer_settings(&self) -> Result<CustomizerSettings> {
        let palette = Palette::new(self.theme.palette.iter().map(|c| c.trim().to_string()))?;

        Ok(CustomizerSettings {
            palette,
            initial_color: self.theme.initial_color.as_deref().map(ColorId::new),
            upload_policy: UploadPolicy {
                allowed_mime_types: self.upload.allowed_mime_types.clone(),
                max_size_bytes: self.upload.max_size_bytes,
                settle_delay: Duration::from_millis(
                    self.upload.settle_delay_ms.min(MAX_SETTLE_DELAY_MS),
                ),
            },
            fade_delay: Duration::from_millis(self.theme.fade_delay_ms.min(MAX_FADE_DELAY_MS)),
        })
    }
}

fn default_allowed_mime_types() -> Vec<String> {
    DEFAULT_ALLOWED_MIME_TYPES
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_max_size_bytes() -> u64 {
    DEFAULT_MAX_UPLOAD_BYTES
}

fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(ToString::to_string).collect()
}

fn default_fade_delay_ms() -> u64 {
    DEFAULT_FADE_DELAY_MS
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ASSETS_DIR)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PaletteError;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(
            config.upload.allowed_mime_types,
            vec!["image/jpeg", "image/jpg", "image/png"]
        );
        assert_eq!(config.upload.max_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.upload.settle_delay_ms, 1500);
        assert_eq!(config.theme.fade_delay_ms, 500);
        assert_eq!(config.theme.palette.first().map(String::as_str), Some("blue"));
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            upload: UploadConfig {
                allowed_mime_types: vec!["image/png".to_string()],
                max_size_bytes: 1024,
                settle_delay_ms: 10,
            },
            theme: ThemeConfig {
                palette: vec!["red".to_string(), "black".to_string()],
                initial_color: Some("black".to_string()),
                fade_delay_ms: 20,
                assets_dir: PathBuf::from("assets/products"),
            },
        };

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[theme]\nfade_delay_ms = 250\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.theme.fade_delay_ms, 250);
        assert_eq!(loaded.theme.palette, default_palette());
        assert_eq!(loaded.upload, UploadConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[upload\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn customizer_settings_clamps_delays() {
        let mut config = Config::default();
        config.upload.settle_delay_ms = u64::MAX;
        config.theme.fade_delay_ms = u64::MAX;

        let settings = config.customizer_settings().expect("valid palette");
        assert_eq!(
            settings.upload_policy.settle_delay,
            Duration::from_millis(MAX_SETTLE_DELAY_MS)
        );
        assert_eq!(settings.fade_delay, Duration::from_millis(MAX_FADE_DELAY_MS));
    }

    #[test]
    fn customizer_settings_rejects_empty_palette() {
        let mut config = Config::default();
        config.theme.palette.clear();
        assert!(matches!(
            config.customizer_settings(),
            Err(Error::Palette(PaletteError::Empty))
        ));
    }
}
