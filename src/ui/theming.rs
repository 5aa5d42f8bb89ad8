// SPDX-License-Identifier: MPL-2.0
//! Page theme derived from the selected product color.
//!
//! Selecting a swatch re-themes the whole window: the accent takes the swatch
//! color and the background a light tint of it.

use crate::domain::color::ColorId;
use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};

/// Share of white mixed into the swatch for the page background.
const BACKGROUND_TINT: f32 = 0.88;

/// Color palette for the page while `color` is selected.
#[must_use]
pub fn page_palette(color: &ColorId) -> Palette {
    let accent = palette::swatch(color.as_str());
    Palette {
        background: tint(accent, BACKGROUND_TINT),
        text: palette::GRAY_900,
        primary: accent,
        success: palette::SUCCESS_500,
        warning: palette::WARNING_500,
        danger: palette::ERROR_500,
    }
}

#[must_use]
pub fn page_theme(color: &ColorId) -> Theme {
    Theme::custom(
        format!("Canopy {}", color.capitalized()),
        page_palette(color),
    )
}

/// Mixes `amount` of white into `color`.
fn tint(color: Color, amount: f32) -> Color {
    let mix = |channel: f32| channel + (1.0 - channel) * amount;
    Color::from_rgb(mix(color.r), mix(color.g), mix(color.b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_follows_selected_color() {
        let blue = page_palette(&ColorId::new("blue"));
        let red = page_palette(&ColorId::new("red"));

        assert_eq!(red.primary, palette::swatch("red"));
        assert_ne!(red.primary, blue.primary);
        assert_ne!(red.background, blue.background);
    }

    #[test]
    fn background_is_a_light_tint() {
        let red = page_palette(&ColorId::new("red"));
        let swatch = palette::swatch("red");

        assert!(red.background.r >= swatch.r);
        assert!(red.background.g > swatch.g);
        assert!(red.background.b > swatch.b);
        assert!(red.background.g > 0.8);
    }

    #[test]
    fn theme_carries_the_page_palette() {
        let theme = page_theme(&ColorId::new("red"));
        assert_eq!(theme.palette().primary, palette::swatch("red"));
    }
}
