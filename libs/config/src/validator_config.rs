//! Validator Configuration Module
//!
//! Provides configuration loading for the request validator.
//! Supports a base TOML file, an environment-specific overlay and
//! `ARGOS_` prefixed environment variables, in that order of precedence.

use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default location of the base configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/validator.toml";

/// Prefix for environment variable overrides, e.g. `ARGOS_VALIDATION__FLEXIBLE=true`
pub const ENV_PREFIX: &str = "ARGOS";

/// Main validator configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Log output settings
    pub logging: LoggingConfig,

    /// Request validation behaviour
    pub validation: ValidationSettings,
}

/// Log output settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

/// Request validation behaviour
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ValidationSettings {
    /// Capability applied to requests that do not carry their own `flexible` flag
    pub flexible: bool,

    /// Stop at the first rejected field instead of reporting all of them
    pub fail_fast: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            flexible: false,
            fail_fast: true,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from files with environment overrides
    ///
    /// A missing base file is not an error; defaults fill every unset key.
    pub fn load(base_path: Option<&Path>, environment: Option<&str>) -> Result<Self> {
        let base = base_path.unwrap_or(Path::new(DEFAULT_CONFIG_PATH));

        let mut builder = Config::builder();

        if base.exists() {
            info!("Loading validator config: {:?}", base);
            builder = builder.add_source(File::from(base).required(true));
        } else {
            debug!("Validator config not found, using defaults: {:?}", base);
        }

        // Add environment-specific overrides if specified
        if let Some(env) = environment {
            let env_file = environment_file(base, env);

            if env_file.exists() {
                info!("Loading environment config: {:?}", env_file);
                builder = builder.add_source(File::from(env_file));
            } else {
                warn!("Environment config not found: {:?}", env_file);
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Load a single TOML file without overlays
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Parse the configured log level, falling back to `info`
    pub fn log_level(&self) -> tracing::Level {
        parse_level(&self.logging.level)
    }
}

/// Map a textual level onto `tracing::Level`
pub fn parse_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

/// Overlay path: `<dir of base>/environments/<env>.toml`
fn environment_file(base: &Path, env: &str) -> PathBuf {
    base.parent()
        .unwrap_or(Path::new("."))
        .join("environments")
        .join(format!("{}.toml", env))
}

/// Convenience function to load configuration with defaults
pub fn load_config(environment: Option<&str>) -> Result<ValidatorConfig> {
    ValidatorConfig::load(None, environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_base_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("validator.toml");

        let config_content = r#"
[logging]
level = "debug"

[validation]
flexible = true
"#;

        fs::write(&config_path, config_content).unwrap();

        let config = ValidatorConfig::load(Some(&config_path), None).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.json);
        assert!(config.validation.flexible);
        // Unset keys keep their defaults
        assert!(config.validation.fail_fast);
    }

    #[test]
    fn test_missing_base_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("absent.toml");

        let config = ValidatorConfig::load(Some(&config_path), None).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_environment_override() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("validator.toml");
        fs::write(&config_path, "[validation]\nflexible = false\n").unwrap();

        let env_dir = dir.path().join("environments");
        fs::create_dir_all(&env_dir).unwrap();
        fs::write(
            env_dir.join("staging.toml"),
            "[validation]\nflexible = true\nfail_fast = false\n",
        )
        .unwrap();

        let config = ValidatorConfig::load(Some(&config_path), Some("staging")).unwrap();
        assert!(config.validation.flexible);
        assert!(!config.validation.fail_fast);
    }

    #[test]
    fn test_toml_roundtrip_and_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dump.toml");

        let mut config = ValidatorConfig::default();
        config.logging.json = true;
        fs::write(&path, config.to_toml().unwrap()).unwrap();

        assert_eq!(ValidatorConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), tracing::Level::TRACE);
        assert_eq!(parse_level("warn"), tracing::Level::WARN);
        assert_eq!(parse_level("verbose"), tracing::Level::INFO);
    }
}
