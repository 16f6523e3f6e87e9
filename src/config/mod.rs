// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: loading and saving
//! the last applied GPS position to a `settings.toml` file.
//!
//! # Format
//!
//! ```toml
//! [gps]
//! latitude = 48.8566
//! longitude = 2.3522
//! ```
//!
//! Coordinates may also be written as integers or numeric strings. INI files
//! written by older releases use the same layout and load unchanged.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `EXIF_GPS_EDITOR_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use exif_gps_editor::config;
//! use exif_gps_editor::gps::Position;
//!
//! let (mut config, _warning) = config::load();
//! config.set_previous_position(Position::new(48.8566, 2.3522));
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gps::Position;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "settings.toml";

/// Last position applied to an image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GpsConfig {
    #[serde(
        default = "default_latitude",
        deserialize_with = "deserialize_coordinate"
    )]
    pub latitude: f64,

    #[serde(
        default = "default_longitude",
        deserialize_with = "deserialize_coordinate"
    )]
    pub longitude: f64,
}

impl Default for GpsConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub gps: GpsConfig,
}

impl Config {
    pub fn previous_position(&self) -> Position {
        Position::new(self.gps.latitude, self.gps.longitude)
    }

    pub fn set_previous_position(&mut self, position: Position) {
        self.gps.latitude = position.latitude;
        self.gps.longitude = position.longitude;
    }
}

fn default_latitude() -> f64 {
    DEFAULT_LATITUDE
}

fn default_longitude() -> f64 {
    DEFAULT_LONGITUDE
}

/// Accepts a float, an integer or a numeric string.
fn deserialize_coordinate<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid coordinate: {}", text)))?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(D::Error::custom(format!("invalid coordinate: {}", value)))
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// Returns a tuple of (config, optional_warning). A missing file silently
/// yields the defaults; an unreadable one yields the defaults and a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded config");
                    return (config, None);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!(
                            "Could not load '{}', using defaults: {}",
                            path.display(),
                            err
                        )),
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
    debug!(path = %path.display(), "saved config");
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
    fn save_and_load_round_trip_preserves_position() {
        let mut config = Config::default();
        config.set_previous_position(Position::new(48.8566, -2.3522));
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.previous_position(), Position::new(48.8566, -2.3522));
    }

    #[test]
    fn saved_file_uses_gps_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        let content = fs::read_to_string(&config_path).expect("failed to read config");

        assert!(content.contains("[gps]"));
        assert!(content.contains("latitude = 0.0"));
        assert!(content.contains("longitude = 0.0"));
    }

    #[test]
    fn load_coerces_integers_and_strings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gps]\nlatitude = 45\nlongitude = \" -1.5 \"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should coerce values");
        assert_eq!(loaded.previous_position(), Position::new(45.0, -1.5));
    }

    #[test]
    fn load_accepts_legacy_ini_layout() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[DEFAULT]\nlatitude = 0\nlongitude = 0\n\n[gps]\nlatitude = 43.6\nlongitude = 1.44\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("legacy layout should load");
        assert_eq!(loaded.previous_position(), Position::new(43.6, 1.44));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let loaded: Config = toml::from_str("[gps]\nlatitude = 10.0\n").expect("parse");
        assert_eq!(loaded.gps.latitude, 10.0);
        assert_eq!(loaded.gps.longitude, DEFAULT_LONGITUDE);

        let empty: Config = toml::from_str("").expect("parse");
        assert_eq!(empty, Config::default());
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
    fn load_from_path_rejects_non_numeric_coordinate() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[gps]\nlatitude = \"north\"\n").expect("failed to write");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_default_and_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gps]\nlatitude = [1, 2]\n")
            .expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep").join("path");
        let mut config = Config::default();
        config.set_previous_position(Position::new(-12.5, 130.25));

        save_with_override(&config, Some(dir.clone())).expect("save should create directories");
        assert!(dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(dir));
        assert!(warning.is_none());
        assert_eq!(loaded.previous_position(), Position::new(-12.5, 130.25));
    }
}
