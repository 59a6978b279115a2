// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[player]` - Player feature flags, autoplay, looping, initial volume
//! - `[gestures]` - Axis selection mode and drag threshold
//! - `[controls]` - Controls auto-hide delay and seek step
//! - `[library]` - Library root directory and page size
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `ICED_REEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let settings = config.session_settings();
//! assert!(settings.hide_delay.as_millis() >= 500);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::{ControlsTimeout, DragThreshold};
use crate::domain::video::{SeekStep, Volume};
use crate::error::Result;
use crate::player::gesture::AxisSelection;
use crate::player::session::{PlayerFeatures, SessionSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Player feature flags and playback start settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerConfig {
    /// Show the platform's stock controls instead of the custom overlay.
    #[serde(
        default = "default_use_native_controls",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_native_controls: Option<bool>,

    #[serde(
        default = "default_enable_gesture_controls",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_gesture_controls: Option<bool>,

    #[serde(
        default = "default_enable_overlay",
        skip_serializing_if = "Option::is_none"
    )]
    pub enable_overlay: Option<bool>,

    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    #[serde(
        default = "default_loop_playback",
        skip_serializing_if = "Option::is_none"
    )]
    pub loop_playback: Option<bool>,

    /// Initial volume (0.0–1.0).
    #[serde(
        default = "default_initial_volume",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_volume: Option<f32>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            use_native_controls: default_use_native_controls(),
            enable_gesture_controls: default_enable_gesture_controls(),
            enable_overlay: default_enable_overlay(),
            autoplay: default_autoplay(),
            loop_playback: default_loop_playback(),
            initial_volume: default_initial_volume(),
        }
    }
}

/// Drag gesture settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GesturesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_selection: Option<AxisSelection>,

    #[serde(
        default = "default_drag_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub drag_threshold_px: Option<f32>,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            axis_selection: Some(AxisSelection::default()),
            drag_threshold_px: default_drag_threshold_px(),
        }
    }
}

/// Player controls settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Auto-hide delay in milliseconds (500–30000).
    #[serde(
        default = "default_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_delay_ms: Option<u64>,

    /// Seek button step in milliseconds (1000–60000).
    #[serde(
        default = "default_seek_step_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub seek_step_ms: Option<u64>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
            seek_step_ms: default_seek_step_ms(),
        }
    }
}

/// Media library settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibraryConfig {
    /// Root directory scanned for albums.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: None,
            page_size: default_page_size(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub gestures: GesturesConfig,

    #[serde(default)]
    pub controls: ControlsConfig,

    #[serde(default)]
    pub library: LibraryConfig,
}

impl Config {
    /// Resolves the player flags, falling back to defaults for unset values.
    #[must_use]
    pub fn player_features(&self) -> PlayerFeatures {
        PlayerFeatures {
            use_native_controls: self
                .player
                .use_native_controls
                .unwrap_or(DEFAULT_USE_NATIVE_CONTROLS),
            enable_gesture_controls: self
                .player
                .enable_gesture_controls
                .unwrap_or(DEFAULT_ENABLE_GESTURE_CONTROLS),
            enable_overlay: self
                .player
                .enable_overlay
                .unwrap_or(DEFAULT_ENABLE_OVERLAY),
        }
    }

    /// Builds validated player-session settings from this configuration.
    ///
    /// Out-of-range values are clamped by the domain newtypes.
    #[must_use]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            features: self.player_features(),
            axis_selection: self.gestures.axis_selection.unwrap_or_default(),
            hide_delay: ControlsTimeout::new(
                self.controls
                    .hide_delay_ms
                    .unwrap_or(DEFAULT_CONTROLS_HIDE_DELAY_MS),
            ),
            seek_step: SeekStep::new(self.controls.seek_step_ms.unwrap_or(DEFAULT_SEEK_STEP_MS)),
            autoplay: self.player.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
            initial_volume: Volume::new(self.player.initial_volume.unwrap_or(DEFAULT_VOLUME)),
        }
    }

    #[must_use]
    pub fn loop_playback(&self) -> bool {
        self.player.loop_playback.unwrap_or(DEFAULT_LOOP_PLAYBACK)
    }

    #[must_use]
    pub fn drag_threshold(&self) -> DragThreshold {
        DragThreshold::new(
            self.gestures
                .drag_threshold_px
                .unwrap_or(DEFAULT_DRAG_THRESHOLD_PX),
        )
    }

    /// Page size for album loading, never zero.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.library.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_use_native_controls() -> Option<bool> {
    Some(DEFAULT_USE_NATIVE_CONTROLS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_enable_gesture_controls() -> Option<bool> {
    Some(DEFAULT_ENABLE_GESTURE_CONTROLS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_enable_overlay() -> Option<bool> {
    Some(DEFAULT_ENABLE_OVERLAY)
}

#[allow(clippy::unnecessary_wraps)]
fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

#[allow(clippy::unnecessary_wraps)]
fn default_loop_playback() -> Option<bool> {
    Some(DEFAULT_LOOP_PLAYBACK)
}

#[allow(clippy::unnecessary_wraps)]
fn default_initial_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

#[allow(clippy::unnecessary_wraps)]
fn default_drag_threshold_px() -> Option<f32> {
    Some(DEFAULT_DRAG_THRESHOLD_PX)
}

#[allow(clippy::unnecessary_wraps)]
fn default_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_CONTROLS_HIDE_DELAY_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_seek_step_ms() -> Option<u64> {
    Some(DEFAULT_SEEK_STEP_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
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

/// Loads the configuration from the default location.
///
/// Returns the configuration and an optional warning message when the file
/// exists but could not be parsed; defaults are used in that case.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "invalid configuration, using defaults: {e}");
                    return (
                        Config::default(),
                        Some(format!("Settings could not be read ({e}); defaults are used.")),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific file, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
