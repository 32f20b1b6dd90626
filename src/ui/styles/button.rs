// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round, borderless icon button (favorite toggle).
///
/// Only a faint circle shows on hover/press so the glyph stays the focus.
pub fn icon(hover_tint: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE * 0.5,
                ..hover_tint
            })),
            button::Status::Pressed => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..hover_tint
            })),
            _ => None,
        };

        button::Style {
            background,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}

/// Page indicator dot; `color` already encodes active/inactive.
pub fn indicator_dot(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: opacity::OVERLAY_STRONG,
                ..color
            },
            _ => color,
        };

        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn icon_button_is_transparent_at_rest() {
        let style = icon(palette::GRAY_900)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn icon_button_shows_tint_when_pressed() {
        let style = icon(palette::GRAY_900)(&Theme::Light, button::Status::Pressed);
        assert!(matches!(style.background, Some(Background::Color(c)) if c.a > 0.0));
    }

    #[test]
    fn indicator_dot_uses_given_color_at_rest() {
        let style = indicator_dot(palette::WHITE)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::WHITE)));
    }
}
