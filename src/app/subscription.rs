// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.
//!
//! Frames are requested only while the product image is fading, and a slow
//! tick runs only while toasts are on screen.

use super::Message;
use crate::ui::customizer::Presentation;
use crate::ui::notifications;
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Redraw interval while a fade is running (~60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Interval for checking toast expiry.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

pub fn create_tick_subscription(
    presentation: &Presentation,
    notifications: &notifications::Manager,
) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if presentation.is_animating(Instant::now()) {
        subscriptions.push(time::every(FRAME_INTERVAL).map(Message::Tick));
    }

    if notifications.has_notifications() {
        subscriptions.push(time::every(NOTIFICATION_TICK).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}
