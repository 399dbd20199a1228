//! Configuration file handling

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Project-wide values baked into the artifacts
    #[serde(default)]
    pub project: ProjectConfig,

    /// Test runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Values shared by the generated artifacts
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Android package name written into google-services.json
    #[serde(default = "default_package_name")]
    pub package_name: String,

    /// Default offered for the Apple Service ID prompt
    #[serde(default = "default_apple_service_id")]
    pub apple_service_id: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            package_name: default_package_name(),
            apple_service_id: default_apple_service_id(),
        }
    }
}

fn default_package_name() -> String {
    "com.tourismeApp.tourisme_app_flutter".to_string()
}

fn default_apple_service_id() -> String {
    "com.tourismeApp.tourisme_app_flutter.social".to_string()
}

/// Test runner configuration
#[derive(Debug, Deserialize)]
pub struct RunnerConfig {
    /// Build/test tool invoked for every step
    #[serde(default = "default_tool")]
    pub tool: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
        }
    }
}

fn default_tool() -> String {
    "flutter".to_string()
}

impl RunnerConfig {
    /// Locate the configured tool in PATH
    pub fn resolve_tool(&self) -> Option<PathBuf> {
        which::which(&self.tool).ok()
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, falling back to defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| super::Error::file_read(path, &e))?;
        toml::from_str(&content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.runner.tool, "flutter");
        assert_eq!(
            config.project.apple_service_id,
            "com.tourismeApp.tourisme_app_flutter.social"
        );
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[runner]\ntool = \"fvm\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.runner.tool, "fvm");
        assert_eq!(config.project.package_name, "com.tourismeApp.tourisme_app_flutter");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[runner\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(super::super::Error::ConfigParse(_))
        ));
    }
}
