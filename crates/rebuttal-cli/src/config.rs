//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use rebuttal_domain::ReasonTable;
use rebuttal_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Sentence extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Denial code to reason label; replaces the built-in table when present
    #[serde(default = "default_reasons")]
    pub reasons: BTreeMap<String, String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// The default configuration file path (`~/.rebuttal/config.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rebuttal").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used if
    /// present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse and validate a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)?;
        if let Some(code) = self.reasons.keys().find(|code| code.trim().is_empty()) {
            return Err(CliError::Config(format!("Invalid reason code '{}'", code)));
        }
        Ok(())
    }

    /// The reason table to compose appeals with.
    pub fn reason_table(&self) -> ReasonTable {
        self.reasons
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            extractor: ExtractorConfig::default(),
            reasons: default_reasons(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_reasons() -> BTreeMap<String, String> {
    ReasonTable::standard()
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.reason_table(), ReasonTable::standard());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.reasons.insert("CO-197".to_string(), "Missing Precertification".to_string());
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert_eq!(
            loaded.reason_table().label("CO-197"),
            Some("Missing Precertification")
        );
        assert_eq!(loaded.extractor, config.extractor);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.reason_table(), ReasonTable::standard());
        assert_eq!(config.extractor, ExtractorConfig::default());
    }

    #[test]
    fn test_reasons_section_replaces_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[reasons]\n\"PR-1\" = \"Deductible\"\n").unwrap();

        let table = Config::load(Some(&path)).unwrap().reason_table();
        assert_eq!(table.label("PR-1"), Some("Deductible"));
        assert!(table.label("CO-50").is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings\ncolor = ").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_invalid_policy_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[extractor.policy]\npositive_keywords = []\nnegative_keywords = [\"no\"]\n",
        )
        .unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Config(_))));
    }

    #[test]
    fn test_sample_config_parses() {
        let sample = include_str!("../../../demos/rebuttal.toml");
        let config: Config = toml::from_str(sample).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.reason_table().len(), 5);
    }
}
