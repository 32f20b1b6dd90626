// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    /// The window was opened or resized; carries the new inner width.
    WindowResized(f32),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SLIDER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override; wins over the configured `theme_mode`.
    pub theme: Option<ThemeMode>,
}
