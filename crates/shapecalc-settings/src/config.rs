//! Configuration and settings management for shapecalc
//!
//! Provides configuration file handling, defaults and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Display settings (result precision, output format)
//! - Form defaults (initial shape, accepted names)

use serde::{Deserialize, Serialize};
use shapecalc_core::format::{DEFAULT_SIGNIFICANT_DIGITS, MAX_SIGNIFICANT_DIGITS};
use shapecalc_core::{Error, NumberFormat, Result, ShapeForm, ShapeKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the config file inside the application config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain display text
    Text,
    /// One JSON document per result
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Result display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Significant digits shown for each result
    pub significant_digits: usize,
    /// Output format for the command line
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
            output_format: OutputFormat::default(),
        }
    }
}

/// Form defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Shape selected when the form opens
    pub default_shape: ShapeKind,
    /// Accept `Triangle2` / `Triangle3` as shape names
    #[serde(default = "default_true")]
    pub accept_legacy_names: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            default_shape: ShapeKind::Square,
            accept_legacy_names: true,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Form defaults
    #[serde(default)]
    pub form: FormSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/shapecalc/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shapecalc").join(CONFIG_FILE_NAME))
    }

    /// Load `path` when given, else the default location if it exists,
    /// else built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from_file(&default),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::other(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::other(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        config.validate()?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::other(
                "Config file must be .json or .toml".to_string(),
            ));
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| Error::other(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SIGNIFICANT_DIGITS).contains(&self.display.significant_digits) {
            return Err(Error::other(format!(
                "Significant digits must be between 1 and {}",
                MAX_SIGNIFICANT_DIGITS
            )));
        }

        Ok(())
    }

    /// Number formatter for results
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.display.significant_digits)
    }

    /// A calculator form set up with these defaults
    pub fn build_form(&self) -> ShapeForm {
        ShapeForm::new(self.form.default_shape, self.number_format())
            .with_legacy_names(self.form.accept_legacy_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.significant_digits, 6);
        assert_eq!(config.form.default_shape, ShapeKind::Square);
        assert!(config.form.accept_legacy_names);
    }

    #[test]
    fn test_precision_bounds() {
        let mut config = Config::new();
        config.display.significant_digits = 0;
        assert!(config.validate().is_err());
        config.display.significant_digits = 18;
        assert!(config.validate().is_err());
        config.display.significant_digits = 17;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::new();
        config.display.significant_digits = 4;
        config.display.output_format = OutputFormat::Json;
        config.form.default_shape = ShapeKind::TriangleThreeSides;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config::new();
        config.save_to_file(&path).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nsignificant_digits = 3\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.display.significant_digits, 3);
        assert_eq!(loaded.display.output_format, OutputFormat::Text);
        assert_eq!(loaded.form, FormSettings::default());
    }

    #[test]
    fn test_invalid_file_rejected() {
        let dir = tempdir().unwrap();

        let bad_ext = dir.path().join("config.yaml");
        std::fs::write(&bad_ext, "").unwrap();
        assert!(Config::load_from_file(&bad_ext).is_err());

        let bad_shape = dir.path().join("config.toml");
        std::fs::write(&bad_shape, "[form]\ndefault_shape = \"Hexagon\"\n").unwrap();
        assert!(Config::load_from_file(&bad_shape).is_err());

        let bad_digits = dir.path().join("digits.json");
        std::fs::write(&bad_digits, r#"{"display": {"significant_digits": 0}}"#).unwrap();
        assert!(Config::load_from_file(&bad_digits).is_err());
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Config::load_or_default(Some(&missing)).is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_build_form_applies_defaults() {
        let mut config = Config::new();
        config.form.default_shape = ShapeKind::Cone;
        config.form.accept_legacy_names = false;

        let mut form = config.build_form();
        assert_eq!(form.selected(), "Cone");
        assert_eq!(form.layout().visible_fields(), 2);
        assert!(form.select("Triangle2").is_none());
    }
}
