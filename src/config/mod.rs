// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[deck]` - Where slides live and the resolution they are authored for
//! - `[display]` - Layout, fit mode, progress style, zoom step, scroll sync
//! - `[input]` - Swipe threshold, debounce delays, optional shortcuts
//! - `[fullscreen]` - Whether fullscreen may be requested at all
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_DECK_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_deck::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let layout = config.display.layout.unwrap_or_default();
//! # let _ = layout;
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::deck::navigation::ProgressMode;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use crate::viewport::fit::FitMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// How slides are arranged on screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// One slide at a time.
    #[default]
    Single,
    /// Every slide side by side, scrolling horizontally.
    Row,
    /// Every slide stacked, scrolling vertically.
    Column,
}

impl LayoutMode {
    /// Returns true when every slide is rendered at once.
    #[must_use]
    pub fn is_strip(self) -> bool {
        !matches!(self, LayoutMode::Single)
    }
}

impl std::str::FromStr for LayoutMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(LayoutMode::Single),
            "row" => Ok(LayoutMode::Row),
            "column" => Ok(LayoutMode::Column),
            other => Err(Error::Config(format!("unknown layout: {}", other))),
        }
    }
}

/// What happens when free scrolling brings another slide to the center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollSync {
    /// The centered slide becomes the current slide.
    #[default]
    Navigate,
    /// The centered slide is only highlighted; the current slide is kept.
    Highlight,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Slide source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckConfig {
    /// Prefix the slide number is appended to (e.g. `slides/page_`).
    #[serde(default = "default_base_path", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Slide file extension without the dot.
    #[serde(default = "default_extension", skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Number of slides. Discovered from the files on disk when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,

    /// Slide shown at startup (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,

    /// Width the slides are authored for.
    #[serde(default = "default_design_width", skip_serializing_if = "Option::is_none")]
    pub design_width: Option<f32>,

    /// Height the slides are authored for.
    #[serde(default = "default_design_height", skip_serializing_if = "Option::is_none")]
    pub design_height: Option<f32>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            extension: default_extension(),
            total: None,
            start: None,
            design_width: default_design_width(),
            design_height: default_design_height(),
        }
    }
}

/// Display and viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Single slide or all-slides strip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutMode>,

    /// How the design resolution is fitted into the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit_mode: Option<FitMode>,

    /// Whether slides may be scaled above their design resolution.
    #[serde(default = "default_allow_upscale", skip_serializing_if = "Option::is_none")]
    pub allow_upscale: Option<bool>,

    /// Formula used by the progress bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_mode: Option<ProgressMode>,

    /// Zoom step percentage for zoom in/out.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Whether scrolling a strip changes the current slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_sync: Option<ScrollSync>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: Some(LayoutMode::default()),
            fit_mode: Some(FitMode::default()),
            allow_upscale: default_allow_upscale(),
            progress_mode: Some(ProgressMode::default()),
            zoom_step: default_zoom_step(),
            scroll_sync: Some(ScrollSync::default()),
        }
    }
}

/// Input handling settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputConfig {
    /// Horizontal distance a swipe must exceed.
    #[serde(default = "default_swipe_threshold", skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,

    /// Debounce delay for scroll-driven slide detection.
    #[serde(default = "default_scroll_debounce_ms", skip_serializing_if = "Option::is_none")]
    pub scroll_debounce_ms: Option<u64>,

    /// Debounce delay for re-centering after a resize.
    #[serde(default = "default_resize_debounce_ms", skip_serializing_if = "Option::is_none")]
    pub resize_debounce_ms: Option<u64>,

    /// `t` toggles the theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_key: Option<bool>,

    /// `p` opens the print instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_key: Option<bool>,

    /// `o` opens the overview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview_key: Option<bool>,

    /// `?` opens the help overlay.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_key: Option<bool>,

    /// `+`, `-` and `0` control zoom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_keys: Option<bool>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            scroll_debounce_ms: default_scroll_debounce_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            theme_key: Some(true),
            print_key: Some(true),
            overview_key: Some(true),
            help_key: Some(true),
            zoom_keys: Some(true),
        }
    }
}

/// Fullscreen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullscreenConfig {
    /// Whether exclusive fullscreen may be used (falls back to maximizing).
    #[serde(default = "default_fullscreen_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self {
            enabled: default_fullscreen_enabled(),
        }
    }
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
    pub deck: DeckConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub fullscreen: FullscreenConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_path() -> Option<String> {
    Some(DEFAULT_BASE_PATH.to_string())
}

fn default_extension() -> Option<String> {
    Some(DEFAULT_EXTENSION.to_string())
}

fn default_design_width() -> Option<f32> {
    Some(DEFAULT_DESIGN_WIDTH)
}

fn default_design_height() -> Option<f32> {
    Some(DEFAULT_DESIGN_HEIGHT)
}

fn default_allow_upscale() -> Option<bool> {
    Some(false)
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP_PERCENT)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

fn default_scroll_debounce_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_DEBOUNCE_MS)
}

fn default_resize_debounce_ms() -> Option<u64> {
    Some(DEFAULT_RESIZE_DEBOUNCE_MS)
}

fn default_fullscreen_enabled() -> Option<bool> {
    Some(true)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
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

/// Saves configuration to a specific path, creating parent directories.
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            deck: DeckConfig {
                base_path: Some("talk/slide-".to_string()),
                extension: Some("svg".to_string()),
                total: Some(15),
                start: Some(3),
                ..DeckConfig::default()
            },
            display: DisplayConfig {
                layout: Some(LayoutMode::Row),
                fit_mode: Some(FitMode::Width),
                allow_upscale: Some(true),
                progress_mode: Some(ProgressMode::Position),
                zoom_step: Some(5.0),
                scroll_sync: Some(ScrollSync::Highlight),
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_falls_back_to_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[deck]\ntotal = 15\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.deck.total, Some(15));
        assert_eq!(loaded.deck.base_path.as_deref(), Some(DEFAULT_BASE_PATH));
        assert_eq!(loaded.input.swipe_threshold, Some(DEFAULT_SWIPE_THRESHOLD_PX));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[display\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn layout_mode_parses_cli_values() {
        assert_eq!("row".parse::<LayoutMode>().ok(), Some(LayoutMode::Row));
        assert_eq!("Column".parse::<LayoutMode>().ok(), Some(LayoutMode::Column));
        assert!("grid".parse::<LayoutMode>().is_err());
        assert!(!LayoutMode::Single.is_strip());
        assert!(LayoutMode::Row.is_strip());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.display.layout, Some(LayoutMode::Single));
        assert_eq!(config.display.allow_upscale, Some(false));
        assert_eq!(config.display.scroll_sync, Some(ScrollSync::Navigate));
        assert_eq!(config.fullscreen.enabled, Some(true));
        assert_eq!(config.input.help_key, Some(true));
    }
}
