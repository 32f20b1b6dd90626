// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[carousel]` - Snap delay and requested image size
//! - `[network]` - Image request timeout
//!
//! Out-of-range numbers are accepted on load and clamped by the accessors, so
//! a hand-edited file never produces a broken pager.
//!
//! # Examples
//!
//! ```no_run
//! use iced_slider::app::config::{self, Config};
//! use iced_slider::ui::theming::ThemeMode;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme_mode = ThemeMode::Dark;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Pager behavior and image request size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Idle time after scrolling before the pager snaps to the nearest page.
    #[serde(default = "default_snap_delay_ms", skip_serializing_if = "Option::is_none")]
    pub snap_delay_ms: Option<u64>,

    /// Width of the placeholder image requested from the image service.
    #[serde(default = "default_image_width", skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,

    /// Height of the placeholder image requested from the image service.
    #[serde(default = "default_image_height", skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            snap_delay_ms: default_snap_delay_ms(),
            image_width: default_image_width(),
            image_height: default_image_height(),
        }
    }
}

impl CarouselConfig {
    /// Snap delay clamped to the supported range.
    #[must_use]
    pub fn snap_delay(&self) -> Duration {
        let ms = self
            .snap_delay_ms
            .unwrap_or(DEFAULT_SNAP_DELAY_MS)
            .clamp(MIN_SNAP_DELAY_MS, MAX_SNAP_DELAY_MS);
        Duration::from_millis(ms)
    }

    /// Requested image size as `(width, height)`, each clamped to the supported range.
    #[must_use]
    pub fn image_size(&self) -> (u32, u32) {
        let width = self
            .image_width
            .unwrap_or(DEFAULT_IMAGE_WIDTH)
            .clamp(MIN_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION);
        let height = self
            .image_height
            .unwrap_or(DEFAULT_IMAGE_HEIGHT)
            .clamp(MIN_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION);
        (width, height)
    }
}

/// Network settings for the image loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Timeout for a single image request, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl NetworkConfig {
    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_snap_delay_ms() -> Option<u64> {
    Some(DEFAULT_SNAP_DELAY_MS)
}

fn default_image_width() -> Option<u32> {
    Some(DEFAULT_IMAGE_WIDTH)
}

fn default_image_height() -> Option<u32> {
    Some(DEFAULT_IMAGE_HEIGHT)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemeMode>().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => (
            Config::default(),
            Some(format!("failed to load {}: {}", path.display(), err)),
        ),
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
