// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::fade;
use iced::widget::container;
use iced::{border, Background, Border, Color, Shadow, Theme};

/// Card surface with rounded corners and an elevation shadow, faded by `alpha`.
pub fn card(surface: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(surface, alpha))),
        border: Border {
            radius: radius::CARD.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color {
                a: opacity::CARD_SHADOW * alpha,
                ..shadow::CARD.color
            },
            ..shadow::CARD
        },
        ..container::Style::default()
    }
}

/// Flat block shown in the image area while loading or after a failure.
///
/// Only the top corners are rounded so the block follows the card outline.
pub fn image_placeholder(fill: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fade(fill, alpha))),
        border: Border {
            radius: border::Radius {
                top_left: radius::CARD,
                top_right: radius::CARD,
                bottom_right: radius::NONE,
                bottom_left: radius::NONE,
            },
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Whole-screen background.
pub fn screen(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}
