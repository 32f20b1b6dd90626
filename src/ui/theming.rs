// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming for the carousel screen.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub screen_background: Color,
    pub card_surface: Color,
    pub image_placeholder: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Indicator
    pub indicator_active: Color,
    pub indicator_inactive: Color,

    // Semantic colors
    pub favorite: Color,
    pub error: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            screen_background: palette::GRAY_50,
            card_surface: palette::WHITE,
            image_placeholder: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            indicator_active: palette::GRAY_900,
            indicator_inactive: palette::GRAY_200,

            favorite: palette::FAVORITE_500,
            error: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            screen_background: palette::GRAY_900,
            card_surface: palette::GRAY_800,
            image_placeholder: Color::from_rgb(0.22, 0.22, 0.24),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            indicator_active: palette::WHITE,
            indicator_inactive: palette::GRAY_400,

            favorite: palette::FAVORITE_500,
            error: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn for_darkness(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {}", other)),
        }
    }
}

/// Built-in Iced theme matching the effective darkness.
#[must_use]
pub fn iced_theme(is_dark: bool) -> Theme {
    if is_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Returns `color` with its alpha multiplied by `alpha`.
#[must_use]
pub fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_card_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.card_surface.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_card_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.card_surface.r < 0.2);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn darkness_selects_scheme_and_theme() {
        assert_eq!(ColorScheme::for_darkness(true), ColorScheme::dark());
        assert_eq!(ColorScheme::for_darkness(false), ColorScheme::light());
        assert_eq!(iced_theme(true), Theme::Dark);
        assert_eq!(iced_theme(false), Theme::Light);
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("SYSTEM".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn fade_scales_alpha_only() {
        let faded = fade(palette::FAVORITE_500, 0.5);
        assert_eq!(faded.r, palette::FAVORITE_500.r);
        assert_eq!(faded.a, 0.5);
    }
}
