// SPDX-License-Identifier: MPL-2.0
//! Customizer layout: product preview on the left, controls on the right.

use super::state::{AssetSlot, Presentation, UploadDisplay};
use crate::domain::color::{ColorId, Palette};
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, column, container, image, row, stack, text, tooltip, Column, Row};
use iced::{alignment, Background, Border, Color, ContentFit, Element, Length, Theme};
use std::time::Instant;

/// Messages produced by the customizer controls.
#[derive(Debug, Clone)]
pub enum Message {
    SelectColor(ColorId),
    OpenFileDialog,
    CancelUpload,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub palette: &'a Palette,
    pub presentation: &'a Presentation,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    row![product_preview(&ctx), controls(&ctx)]
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn product_preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let presentation = ctx.presentation;
    let product_opacity = presentation.product_opacity(ctx.now);

    let product: Element<'a, Message> = match presentation.product_image() {
        Some(AssetSlot::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .opacity(product_opacity)
            .into(),
        Some(AssetSlot::Missing) => centered(
            text(ctx.i18n.tr("product-unavailable"))
                .size(typography::BODY)
                .style(muted_text),
        ),
        None => centered(text("")),
    };

    let mut layers = stack![product];

    if let Some(logo) = presentation.logo() {
        layers = layers.push(centered(
            image(logo.handle.clone())
                .width(Length::Fixed(sizing::LOGO_PREVIEW))
                .height(Length::Fixed(sizing::LOGO_PREVIEW))
                .content_fit(ContentFit::Contain)
                .opacity(product_opacity),
        ));
    }

    if presentation.is_loading() {
        layers = layers.push(centered(
            container(text(ctx.i18n.tr("product-loading")).size(typography::BODY))
                .padding(spacing::XS)
                .style(loader_style),
        ));
    }

    container(layers)
        .width(Length::Fixed(sizing::PRODUCT_WIDTH))
        .height(Length::Fixed(sizing::PRODUCT_HEIGHT))
        .style(product_frame_style)
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let swatches = ctx
        .palette
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, color| {
            let name = color.capitalized();
            row.push(swatch(
                color,
                color == ctx.presentation.selected(),
                i18n.tr_with_args("color-swatch-tooltip", &[("color", name.as_str())]),
            ))
        });

    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .push(text(i18n.tr("product-title")).size(typography::TITLE_LG))
        .push(section_title(i18n.tr("color-section-title")))
        .push(swatches)
        .push(section_title(i18n.tr("logo-section-title")))
        .push(upload_controls(ctx))
        .into()
}

fn upload_controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    match ctx.presentation.upload() {
        UploadDisplay::Processing { file_name } => column![
            row![
                button(text(i18n.tr("upload-button-busy")).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .style(button::primary),
                button(text(i18n.tr("upload-cancel")).size(typography::BODY))
                    .on_press(Message::CancelUpload)
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .style(button::secondary),
            ]
            .spacing(spacing::XS),
            caption(i18n.tr_with_args("upload-status-processing", &[("file", file_name.as_str())])),
        ]
        .spacing(spacing::XS)
        .into(),
        UploadDisplay::Idle => {
            let status = match ctx.presentation.logo() {
                Some(logo) => i18n.tr_with_args(
                    "upload-status-ready",
                    &[("file", logo.file_name.as_str())],
                ),
                None => i18n.tr("upload-no-logo"),
            };
            column![upload_button(i18n), caption(status)]
                .spacing(spacing::XS)
                .into()
        }
    }
}

fn upload_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    button(text(i18n.tr("upload-button")).size(typography::BODY))
        .on_press(Message::OpenFileDialog)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button::primary)
        .into()
}

fn swatch<'a>(color: &ColorId, selected: bool, label: String) -> Element<'a, Message> {
    let fill = palette::swatch(color.as_str());

    let dot = button(text(""))
        .width(Length::Fixed(sizing::SWATCH))
        .height(Length::Fixed(sizing::SWATCH))
        .on_press(Message::SelectColor(color.clone()))
        .style(move |theme: &Theme, status| swatch_style(theme, status, fill, selected));

    tooltip(
        dot,
        container(text(label).size(typography::CAPTION))
            .padding(spacing::XXS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}

fn section_title<'a>(label: String) -> Element<'a, Message> {
    text(label).size(typography::TITLE_SM).into()
}

fn caption<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(typography::CAPTION)
        .style(muted_text)
        .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

fn swatch_style(_theme: &Theme, status: button::Status, fill: Color, selected: bool) -> button::Style {
    let ring = if selected {
        Border {
            color: palette::GRAY_900,
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        }
    } else {
        Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        }
    };

    let fill = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_STRONG,
            ..fill
        },
        button::Status::Active | button::Status::Disabled => fill,
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette::WHITE,
        border: ring,
        shadow: shadow::NONE,
        snap: true,
    }
}

fn product_frame_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            color: palette::GRAY_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

fn loader_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn muted_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::GRAY_700),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_swatch_has_a_thicker_ring() {
        let fill = palette::swatch("red");
        let selected = swatch_style(&Theme::Light, button::Status::Active, fill, true);
        let idle = swatch_style(&Theme::Light, button::Status::Active, fill, false);
        assert!(selected.border.width > idle.border.width);
        assert_eq!(selected.background, Some(Background::Color(fill)));
    }

    #[test]
    fn hovered_swatch_is_dimmed() {
        let fill = palette::swatch("blue");
        let hovered = swatch_style(&Theme::Light, button::Status::Hovered, fill, false);
        assert_eq!(
            hovered.background,
            Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..fill
            }))
        );
    }
}
