//! Application configuration
//!
//! Read once at startup from `config.json` in the platform config directory.
//! Every field has a default, so a partial file (or no file) is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::theme::ThemeKind;

/// Largest digit limit an `f64` can hold without losing integer precision.
pub const MAX_DIGITS_LIMIT: usize = 15;
/// Largest fixed-point precision accepted for result formatting.
pub const DECIMAL_PLACES_LIMIT: usize = 20;

const LOG_LEVELS: &[&str] = &["debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Native window options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
    pub resizable: bool,
    pub always_on_top: bool,
    /// Draw the platform title bar and border.
    pub frame: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 500.0,
            min_width: 280.0,
            min_height: 400.0,
            resizable: false,
            always_on_top: false,
            frame: true,
        }
    }
}

/// Number entry and rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Digits accepted while typing an operand; also the exponential threshold.
    pub max_digits: usize,
    /// Fractional digits kept when a result is rounded.
    pub decimal_places: usize,
    pub show_previous_operation: bool,
    pub animate_buttons: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_digits: 12,
            decimal_places: 10,
            show_previous_operation: true,
            animate_buttons: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentConfig {
    pub enable_logging: bool,
    /// One of `debug`, `info`, `warn`, `error`.
    pub log_level: String,
}

impl Default for DevelopmentConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub keyboard_support: bool,
    pub percentage_calculation: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            keyboard_support: true,
            percentage_calculation: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub display: DisplayConfig,
    pub development: DevelopmentConfig,
    pub features: FeatureConfig,
    pub theme: ThemeKind,
}

impl AppConfig {
    /// Default location: `<config dir>/tally/config.json`
    pub fn config_path() -> PathBuf {
        config_dir("tally").join("config.json")
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path())
    }

    /// Load `path`, or defaults when it does not exist yet (first launch).
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        if display.max_digits == 0 || display.max_digits > MAX_DIGITS_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "display.max_digits must be between 1 and {}, got {}",
                MAX_DIGITS_LIMIT, display.max_digits
            )));
        }
        if display.decimal_places == 0 || display.decimal_places > DECIMAL_PLACES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "display.decimal_places must be between 1 and {}, got {}",
                DECIMAL_PLACES_LIMIT, display.decimal_places
            )));
        }
        if !LOG_LEVELS.contains(&self.development.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "development.log_level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.development.log_level
            )));
        }
        Ok(())
    }
}

/// Get the config directory for an app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.display.max_digits, 12);
        assert_eq!(config.display.decimal_places, 10);
        assert!(config.display.show_previous_operation);
        assert!(config.features.keyboard_support);
        assert_eq!(config.development.log_level, "info");
        assert_eq!(config.theme, ThemeKind::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "display": { "max_digits": 8 }, "theme": "dark" }"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.display.max_digits, 8);
        assert_eq!(config.display.decimal_places, 10);
        assert_eq!(config.theme, ThemeKind::Dark);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = AppConfig::default();
        config.features.percentage_calculation = false;
        config.theme = ThemeKind::Minimal;

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = AppConfig::default();
        config.display.max_digits = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.display.decimal_places = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.development.log_level = "verbose".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::Io(_))));
        assert_eq!(AppConfig::load_or_default(&path).unwrap(), AppConfig::default());
    }
}
