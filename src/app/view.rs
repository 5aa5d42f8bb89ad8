// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::application::customizer::Customizer;
use crate::i18n::I18n;
use crate::ui::customizer::{self, Presentation};
use crate::ui::notifications::{self, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub customizer: &'a Customizer,
    pub presentation: &'a Presentation,
    pub notifications: &'a notifications::Manager,
}

/// Renders the customizer with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = customizer::view(customizer::ViewContext {
        i18n: ctx.i18n,
        palette: ctx.customizer.palette(),
        presentation: ctx.presentation,
        now: Instant::now(),
    })
    .map(Message::Customizer);

    let content = Container::new(screen)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(content)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
