// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping the `image` crate and file system I/O.
//!
//! # Available Adapters
//!
//! - [`image_decoder`]: Image decoding via the `image` crate (implements [`ImageDecoder`])
//! - [`assets`]: Naming-convention asset lookup (implements [`AssetResolver`])
//! - [`file_probe`]: Builds a [`FileDescriptor`] from a picked file
//!
//! [`ImageDecoder`]: crate::application::port::ImageDecoder
//! [`AssetResolver`]: crate::application::port::AssetResolver
//! [`FileDescriptor`]: crate::domain::upload::FileDescriptor

pub mod assets;
pub mod file_probe;
pub mod image_decoder;

pub use assets::NamingConventionResolver;
pub use file_probe::probe_file;
pub use image_decoder::ImageRsDecoder;
