// SPDX-License-Identifier: MPL-2.0
//! The customizer screen: product preview, color swatches and logo upload.

mod fade;
mod state;
mod view;

pub use fade::Fade;
pub use state::{AssetSlot, Logo, Presentation, UploadDisplay};
pub use view::{view, Message, ViewContext};
