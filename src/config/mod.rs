//! Configuration file support.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/squiggler/config.toml`.
//! Settings include drawing defaults and surface dimensions.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, SurfaceConfig};

use crate::draw::StrokeStyle;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the
/// TOML file. All fields have sensible defaults and will use those if
/// not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_style = "wobble"
/// stroke_color = "white"
/// stroke_width = 3.0
///
/// [surface]
/// width = 1024
/// height = 768
/// background = "black"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing defaults (style, stroke color, stroke width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Drawing surface settings (dimensions, background)
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a
    /// warning is logged. Validated ranges:
    /// - `stroke_width`: 1.0 - 20.0
    /// - `width`/`height`: 16 - 8192
    /// - `default_style`: must be a registered style label
    fn validate_and_clamp(&mut self) {
        // Stroke width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_width
            );
            self.drawing.stroke_width = self.drawing.stroke_width.clamp(1.0, 20.0);
        }

        // Surface dimensions: 16 - 8192
        if !(16..=8192).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 16-8192 range",
                self.surface.width
            );
            self.surface.width = self.surface.width.clamp(16, 8192);
        }
        if !(16..=8192).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 16-8192 range",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(16, 8192);
        }

        // Style label must resolve against the registry
        if self.drawing.default_style.parse::<StrokeStyle>().is_err() {
            log::warn!(
                "Unknown default_style '{}', falling back to '{}'",
                self.drawing.default_style,
                StrokeStyle::default().label()
            );
            self.drawing.default_style = StrokeStyle::default().label().to_string();
        }
    }

    /// The stroke style the session starts with.
    ///
    /// Always resolves after [`load`](Self::load), which validates the
    /// label; an unvalidated label falls back to the default style.
    pub fn initial_style(&self) -> StrokeStyle {
        self.drawing.default_style.parse().unwrap_or_default()
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/squiggler/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("squiggler");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/squiggler/config.toml`, creating the parent directory
    /// if needed. Kept for future use (e.g., runtime config editing).
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config
    /// cannot be serialized, or the file cannot be written.
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let mut config = Config::default();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_style, "line");
        assert_eq!(config.drawing.stroke_width, 3.0);
        assert_eq!(config.surface.width, 1024);
        assert_eq!(config.surface.height, 768);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            stroke_width = 400.0

            [surface]
            width = 4
            height = 100000
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_width, 20.0);
        assert_eq!(config.surface.width, 16);
        assert_eq!(config.surface.height, 8192);
    }

    #[test]
    fn unknown_style_falls_back_to_default() {
        let mut config: Config = toml::from_str(
            r#"
            [drawing]
            default_style = "zigzag"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_style, "line");
        assert_eq!(config.initial_style(), StrokeStyle::Line);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_style = "super-swirl"
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_style(), StrokeStyle::SuperSwirl);
        assert_eq!(config.drawing.stroke_width, 3.0);
        assert_eq!(config.surface.width, 1024);
    }
}
