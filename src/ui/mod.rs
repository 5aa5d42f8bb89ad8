// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`customizer`] - Product preview, swatches and upload controls
//! - [`notifications`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Page theme following the selected product color

pub mod customizer;
pub mod design_tokens;
pub mod notifications;
pub mod theming;
