// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Upload**: Accepted logo types, size limit and settle delay
//! - **Theme**: Palette, fade delay and asset location

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// MIME types accepted for logo uploads.
pub const DEFAULT_ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Largest accepted logo (5 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Processing time between decode and showing the preview (in milliseconds).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1500;

/// Upper bound for the settle delay (in milliseconds).
pub const MAX_SETTLE_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Theme Defaults
// ==========================================================================

/// Swatches offered when the config does not list any.
pub const DEFAULT_PALETTE: [&str; 5] = ["blue", "red", "yellow", "green", "pink"];

/// Time the product image stays faded out before the asset swap (in milliseconds).
pub const DEFAULT_FADE_DELAY_MS: u64 = 500;

/// Upper bound for the fade delay (in milliseconds).
pub const MAX_FADE_DELAY_MS: u64 = 5_000;

/// Directory holding `<Color>.png` product images, relative to the working directory.
pub const DEFAULT_ASSETS_DIR: &str = "images";
