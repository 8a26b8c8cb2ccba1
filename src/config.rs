//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::views::Palette;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the data feed comes from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    /// Dataset JSON loaded at startup
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

/// Chart colors
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,

    /// Team name → driver line color
    #[serde(default = "default_team_colors")]
    pub team_colors: BTreeMap<String, String>,
}

fn default_primary_color() -> String {
    Palette::default().primary
}

fn default_team_colors() -> BTreeMap<String, String> {
    Palette::default().team_colors.into_iter().collect()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            primary_color: default_primary_color(),
            team_colors: default_team_colors(),
        }
    }
}

impl DisplayConfig {
    /// Palette handed to the view composer
    pub fn palette(&self) -> Palette {
        Palette {
            primary: self.primary_color.clone(),
            team_colors: self
                .team_colors
                .iter()
                .map(|(team, color)| (team.clone(), color.clone()))
                .collect(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load from environment variables only
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Load from file, then apply environment overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pitwall").join("config.toml")),
            Some(PathBuf::from("/etc/pitwall/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(dataset) = std::env::var("PITWALL_DATASET") {
            self.data.dataset = Some(PathBuf::from(dataset));
        }
        if let Ok(color) = std::env::var("PITWALL_PRIMARY_COLOR") {
            self.display.primary_color = color;
        }
        if let Ok(level) = std::env::var("PITWALL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PITWALL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Pitwall Configuration
#
# Environment variables override these settings:
# - PITWALL_DATASET
# - PITWALL_PRIMARY_COLOR
# - PITWALL_LOG_LEVEL
# - PITWALL_LOG_FORMAT

[data]
# Dataset JSON loaded at startup (drivers, teams, currentRace, historicalRaces, user)
# dataset = "./season.json"

[display]
# Fallback chart color
primary_color = "#ef233c"

# Driver line color by team name
[display.team_colors]
"Red Bull Racing" = "#0600EF"
"Mercedes" = "#00D2BE"
"Ferrari" = "#DC0000"
"McLaren" = "#FF8700"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.data.dataset.is_none());
        assert_eq!(config.display.primary_color, "#ef233c");
        assert_eq!(config.display.team_colors.len(), 4);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.display.palette().team_color("Mercedes"), "#00D2BE");
    }

    #[test]
    fn test_custom_team_colors_replace_defaults() {
        let config: Config = toml::from_str(
            r##"
            [display]
            primary_color = "#111111"
            [display.team_colors]
            "Williams" = "#005AFF"
            "##,
        )
        .unwrap();

        let palette = config.display.palette();
        assert_eq!(palette.team_color("Williams"), "#005AFF");
        assert_eq!(palette.team_color("Ferrari"), "#111111");
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging\nlevel = 3").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nprimary_color = \"#222222\"").unwrap();

        std::env::set_var("PITWALL_PRIMARY_COLOR", "#333333");
        std::env::set_var("PITWALL_DATASET", "/data/season.json");
        let config = Config::load_with_env(file.path()).unwrap();
        std::env::remove_var("PITWALL_PRIMARY_COLOR");
        std::env::remove_var("PITWALL_DATASET");

        assert_eq!(config.display.primary_color, "#333333");
        assert_eq!(config.data.dataset, Some(PathBuf::from("/data/season.json")));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::load(Path::new("/nonexistent/pitwall.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
