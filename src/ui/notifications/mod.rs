// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for upload and asset feedback.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - Queue with a visible limit and auto-dismiss timers
//! - [`toast`] - Rendering of the toast stack
//!
//! Toasts appear in the bottom-right corner. Info toasts last 3s, warnings
//! 5s, and errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
