// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`color`]: Product colors ([`ColorId`](color::ColorId), [`Palette`](color::Palette),
//!   [`AssetReference`](color::AssetReference))
//! - [`error`]: Domain error types ([`ValidationError`](error::ValidationError),
//!   [`DecodeError`](error::DecodeError), [`AssetLoadError`](error::AssetLoadError))
//! - [`media`]: Decoded pixel data ([`RawImage`](media::RawImage))
//! - [`upload`]: Upload handles and policy ([`UploadHandle`](upload::UploadHandle),
//!   [`UploadPolicy`](upload::UploadPolicy))

pub mod color;
pub mod error;
pub mod media;
pub mod upload;
