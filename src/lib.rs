// SPDX-License-Identifier: MPL-2.0
//! `canopy` is a product customizer built with the Iced GUI framework.
//!
//! Pick a color to swap the product image with a fade, and upload a logo to
//! preview it on the product. The upload and color-transition state machines
//! live in [`application::customizer`] and are independent of the GUI.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
