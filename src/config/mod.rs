// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[gesture]` - Swipe detection distances and optional flick speed
//! - `[keyboard]` - Fullscreen toggle key
//! - `[fullscreen]` - Whether fullscreen is offered at all
//! - `[gallery]` - Directory listing order
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `SHOT_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use shot_lens::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::viewer::{GestureConfig, KeyBindings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
}

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Swipe detection settings. Out-of-range values are clamped when read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureSection {
    #[serde(default = "default_min_distance", skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<f32>,

    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// Release speed that confirms a short flick. Unset disables flicks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flick_velocity: Option<f32>,
}

impl Default for GestureSection {
    fn default() -> Self {
        Self {
            min_distance: default_min_distance(),
            swipe_threshold: default_swipe_threshold(),
            flick_velocity: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardSection {
    /// Single character toggling fullscreen.
    #[serde(
        default = "default_fullscreen_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub fullscreen_key: Option<String>,
}

impl Default for KeyboardSection {
    fn default() -> Self {
        Self {
            fullscreen_key: default_fullscreen_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullscreenSection {
    #[serde(default = "default_fullscreen_enabled")]
    pub enabled: bool,
}

impl Default for FullscreenSection {
    fn default() -> Self {
        Self {
            enabled: default_fullscreen_enabled(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GallerySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gesture: GestureSection,

    #[serde(default)]
    pub keyboard: KeyboardSection,

    #[serde(default)]
    pub fullscreen: FullscreenSection,

    #[serde(default)]
    pub gallery: GallerySection,
}

impl Config {
    /// Gesture thresholds, clamped into their accepted ranges.
    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        let section = &self.gesture;
        GestureConfig {
            min_distance: section
                .min_distance
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_MIN_DISTANCE)
                .clamp(MIN_MIN_DISTANCE, MAX_MIN_DISTANCE),
            swipe_threshold: section
                .swipe_threshold
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
                .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD),
            flick_velocity: section
                .flick_velocity
                .filter(|v| v.is_finite())
                .map(|velocity| velocity.clamp(MIN_FLICK_VELOCITY, MAX_FLICK_VELOCITY)),
        }
    }

    /// Key bindings. A fullscreen key that is not exactly one character
    /// falls back to the default.
    #[must_use]
    pub fn key_bindings(&self) -> KeyBindings {
        let Some(raw) = self.keyboard.fullscreen_key.as_deref() else {
            return KeyBindings::default();
        };
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !ch.is_whitespace() => KeyBindings::new(ch),
            _ => {
                log::warn!("ignoring fullscreen_key {raw:?}: expected a single character");
                KeyBindings::default()
            }
        }
    }

    #[must_use]
    pub fn fullscreen_enabled(&self) -> bool {
        self.fullscreen.enabled
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.gallery.sort_order.unwrap_or_default()
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_min_distance() -> Option<f32> {
    Some(DEFAULT_MIN_DISTANCE)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_fullscreen_key() -> Option<String> {
    Some(DEFAULT_FULLSCREEN_KEY.to_string())
}

fn default_fullscreen_enabled() -> bool {
    true
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
/// default config with an i18n key describing the problem.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
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
