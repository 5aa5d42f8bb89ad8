// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These are the collaborators the customizer core consumes. The traits use
//! only domain types, so the core never sees Iced handles or `image` crate
//! types.
//!
//! # Available Ports
//!
//! - [`asset`]: Deterministic color → product asset mapping
//! - [`media`]: Decoding a file into displayable pixels
//! - [`presentation`]: Receiving the notifications the core emits
//!
//! # Design Notes
//!
//! - No `async fn`: asynchronous work is described as jobs and executed by
//!   the shell with Iced's `Task` (see `app::runtime`)
//! - Decoders are `Send + Sync` so they can run on blocking worker threads

pub mod asset;
pub mod media;
pub mod presentation;

pub use asset::AssetResolver;
pub use media::ImageDecoder;
pub use presentation::{PresentationSink, UiEvent};
