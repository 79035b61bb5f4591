//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.
//!
//! Only preferences and starting defaults live here. The session itself
//! (edited breakpoints, gap, class name) is never written back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::models::{BreakpointMap, LayoutConfig, FALLBACK_CLASS_NAME};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Pixels one terminal column stands for in the preview grid
    #[serde(default = "default_preview_cell_px")]
    pub preview_cell_px: u32,
}

/// Default preview scale (8px per terminal cell)
const fn default_preview_cell_px() -> u32 {
    8
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
            preview_cell_px: default_preview_cell_px(),
        }
    }
}

/// Values a new session starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Initial CSS class name
    pub class_name: String,
    /// Initial gap in pixels
    pub gap: f64,
    /// Initial breakpoints
    pub breakpoints: BreakpointMap,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        Self {
            class_name: FALLBACK_CLASS_NAME.to_string(),
            gap: layout.gap,
            breakpoints: layout.breakpoints,
        }
    }
}

impl DefaultsConfig {
    /// Builds the starting session settings.
    #[must_use]
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig::new(self.breakpoints.clone(), self.gap, self.class_name.clone())
    }
}

/// Copy notification timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Milliseconds the toast spends visible, and again closing
    pub phase_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { phase_ms: 2000 }
    }
}

impl NotificationConfig {
    /// Phase duration as a `Duration`.
    #[must_use]
    pub const fn phase_duration(&self) -> Duration {
        Duration::from_millis(self.phase_ms)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/flexcols/config.toml`
/// - macOS: `~/Library/Application Support/flexcols/config.toml`
/// - Windows: `%APPDATA%\flexcols\config.toml`
///
/// The directory can be overridden with the `FLEXCOLS_CONFIG_DIR` environment variable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Session starting values
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Toast timing
    #[serde(default)]
    pub notification: NotificationConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path, honoring `FLEXCOLS_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config = Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Parses and validates TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<PathBuf> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(config_path)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `preview_cell_px` is positive
    /// - `phase_ms` is positive
    /// - `gap` is a finite, non-negative number
    pub fn validate(&self) -> Result<()> {
        if self.ui.preview_cell_px == 0 {
            anyhow::bail!("ui.preview_cell_px must be greater than 0");
        }
        if self.notification.phase_ms == 0 {
            anyhow::bail!("notification.phase_ms must be greater than 0");
        }
        if !self.defaults.gap.is_finite() || self.defaults.gap < 0.0 {
            anyhow::bail!(
                "defaults.gap must be a non-negative number, got {}",
                self.defaults.gap
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert!(!config.ui.show_help_on_startup);
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.preview_cell_px, 8);
        assert_eq!(config.notification.phase_duration(), Duration::from_millis(2000));
        assert_eq!(config.defaults.class_name, "class");
        assert_eq!(config.defaults.breakpoints.widths(), vec![500, 600, 700]);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.ui.preview_cell_px = 0;
        assert!(config.validate().is_err());

        config = Config::new();
        config.notification.phase_ms = 0;
        assert!(config.validate().is_err());

        config = Config::new();
        config.defaults.gap = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::new();
        let content = toml::to_string_pretty(&config).unwrap();
        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = Config::from_toml("[ui]\nshow_help_on_startup = true\n").unwrap();
        assert!(config.ui.show_help_on_startup);
        assert_eq!(config.ui.preview_cell_px, 8);
        assert_eq!(config.notification.phase_ms, 2000);
        assert_eq!(config.defaults, DefaultsConfig::default());
    }

    #[test]
    fn test_custom_defaults() {
        let content = r#"
[defaults]
class_name = "cards"
gap = 16.0

[[defaults.breakpoints]]
width = 320
columns = 2

[[defaults.breakpoints]]
width = 960
columns = 4
"#;
        let config = Config::from_toml(content).unwrap();
        let layout = config.defaults.layout();
        assert_eq!(layout.class_name, "cards");
        assert_eq!(layout.breakpoints.columns(960), Some(4));
        assert_eq!(layout.items_on_screen, 8);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        assert!(Config::from_toml("[notification]\nphase_ms = 0\n").is_err());
        assert!(Config::from_toml("not toml at all [").is_err());
    }
}
