//! Configuration management for jira-points.
//!
//! Supports layered configuration: defaults → project → user → env.
//! None of the layers can change point values; they only choose which
//! registered mapping is used and how it is presented.

use crate::domain::JIRA_CONFIG_NAME;
use crate::error::ConfigError;
use crate::services::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-level configuration file name
pub const PROJECT_CONFIG_FILE: &str = ".jira-points.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub estimates: EstimatesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ProjectConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.jira-points.toml in project root)
        if let Some(project_config) = project_root.and_then(Self::project_config_path) {
            builder = builder.add_source(File::from(project_config).required(false));
        }

        // 3. User config (~/.config/jira-points/config.toml)
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (JIRA_POINTS__SECTION__KEY)
        builder = builder.add_source(
            Environment::with_prefix("JIRA_POINTS")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Load a single explicit file on top of the defaults
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        use config::{Config, File};

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let builder = Config::builder()
            .add_source(File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(File::from(path.to_path_buf()));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Load configuration with default settings only
    pub fn load_defaults() -> Self {
        Self::default()
    }

    /// Check values that deserialize but are unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.estimates.config_name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "estimates.config_name must not be empty".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Project config file under `root`, if present
    pub fn project_config_path(root: &Path) -> Option<PathBuf> {
        let path = root.join(PROJECT_CONFIG_FILE);
        path.exists().then_some(path)
    }

    /// Location of the per-user config file
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "jira-points", "jira-points")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Find the project root by walking up to the nearest `.git`
    pub fn discover_root(start_path: Option<PathBuf>) -> Option<PathBuf> {
        let start = start_path
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let mut current = start.as_path();
        loop {
            // .git is a directory, or a file inside a worktree
            if current.join(".git").exists() {
                return Some(current.to_path_buf());
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => return None,
            }
        }
    }
}

/// Which points configuration to use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatesConfig {
    /// Registered mapping name
    #[serde(default = "default_config_name")]
    pub config_name: String,
}

impl Default for EstimatesConfig {
    fn default() -> Self {
        Self {
            config_name: default_config_name(),
        }
    }
}

fn default_config_name() -> String {
    JIRA_CONFIG_NAME.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used by `show` when none is given
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ProjectConfig::default();
        assert_eq!(config.estimates.config_name, "Jira Config");
        assert_eq!(config.output.format, OutputFormat::Table);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = ProjectConfig::load_file(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.estimates.config_name, "Jira Config");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_file_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let err = ProjectConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_load_file_rejects_empty_config_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.toml");
        fs::write(&path, "[estimates]\nconfig_name = \"\"\n").unwrap();

        let err = ProjectConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_file_rejects_empty_log_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quiet.toml");
        fs::write(&path, "[logging]\nlevel = \"\"\n").unwrap();

        let err = ProjectConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("logging.level")));
    }

    #[test]
    fn test_load_file_rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        let err = ProjectConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_project_config_path() {
        let dir = TempDir::new().unwrap();
        assert_eq!(ProjectConfig::project_config_path(dir.path()), None);

        let path = dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&path, "").unwrap();
        assert_eq!(ProjectConfig::project_config_path(dir.path()), Some(path));
    }

    #[test]
    #[serial]
    fn test_load_env_layer() {
        let dir = TempDir::new().unwrap();
        std::env::set_var("JIRA_POINTS__OUTPUT__FORMAT", "json");

        let result = ProjectConfig::load(Some(dir.path()));
        std::env::remove_var("JIRA_POINTS__OUTPUT__FORMAT");

        let config = result.unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.estimates.config_name, "Jira Config");
    }

    #[test]
    #[serial]
    fn test_env_overrides_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[estimates]\nconfig_name = \"Project Points\"\n",
        )
        .unwrap();

        let from_project = ProjectConfig::load(Some(dir.path())).unwrap();
        assert_eq!(from_project.estimates.config_name, "Project Points");

        std::env::set_var("JIRA_POINTS__ESTIMATES__CONFIG_NAME", "Env Points");
        let result = ProjectConfig::load(Some(dir.path()));
        std::env::remove_var("JIRA_POINTS__ESTIMATES__CONFIG_NAME");

        assert_eq!(result.unwrap().estimates.config_name, "Env Points");
    }

    #[test]
    #[serial]
    fn test_load_project_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = ProjectConfig::load(Some(dir.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_discover_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let root = ProjectConfig::discover_root(Some(nested)).unwrap();
        assert_eq!(root, dir.path());
    }
}
