use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::data_exporter::DEFAULT_EXPORT_FILE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub export: ExportConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show row numbers in the results table
    pub show_row_numbers: bool,

    /// Use Unicode glyphs for sort and status indicators
    pub use_glyphs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for exported files (current directory when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Rows moved by PageUp/PageDown
    pub page_size: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_row_numbers: false,
            use_glyphs: true,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl ExportConfig {
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Config {
    /// Load config from the default location, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        if !config_path.exists() {
            tracing::debug!(target: "config", "No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        tracing::info!(target: "config", "Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(crate::utils::app_paths::AppPaths::config_dir()?.join("config.toml"))
    }

    /// Default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# Employee Directory Configuration File
# Location: ~/.config/employee-directory/config.toml (Linux)
#           ~/Library/Application Support/employee-directory/config.toml (macOS)
#           %APPDATA%\employee-directory\config.toml (Windows)

[display]
# Show row numbers in the results table
show_row_numbers = false

# Use Unicode glyphs (arrows, check marks); set to false for plain ASCII
use_glyphs = true

[export]
# Directory for exported CSV files (defaults to the current directory)
# directory = "/path/to/exports"

# Name of the exported file
file_name = "employee-data.csv"

[behavior]
# Rows moved by PageUp/PageDown in the table
page_size = 10
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.display.show_row_numbers);
        assert_eq!(config.export.file_name, "employee-data.csv");
        assert_eq!(config.export.resolved_directory(), PathBuf::from("."));
        assert_eq!(config.behavior.page_size, 10);
    }

    #[test]
    fn test_commented_default_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::create_default_with_comments()).unwrap();
        assert_eq!(parsed.export.file_name, DEFAULT_EXPORT_FILE);
        assert!(parsed.display.use_glyphs);
        assert!(parsed.export.directory.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: Config = toml::from_str("[export]\ndirectory = \"/tmp/out\"\n").unwrap();
        assert_eq!(parsed.export.directory, Some(PathBuf::from("/tmp/out")));
        assert_eq!(parsed.export.file_name, DEFAULT_EXPORT_FILE);
        assert_eq!(parsed.behavior.page_size, 10);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.behavior.page_size = 25;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.behavior.page_size, 25);
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display\nshow_row_numbers = yes").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
