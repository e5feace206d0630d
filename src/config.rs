//! Configuration module for sagectl
//!
//! Handles loading and merging configuration from multiple sources:
//! - Default values
//! - System configuration (/etc/sagectl/config.toml)
//! - User configuration (~/.sagectl/config.toml)
//! - Project configuration (./sagectl.toml)
//! - Environment variables
//! - Command-line arguments (applied by the binary)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// AWS client settings
    pub aws: AwsSettings,

    /// Default command behavior
    pub defaults: Defaults,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Colors and output settings
    pub colors: ColorsConfig,
}

/// Settings used to build the SageMaker client.
///
/// Anything left unset falls through to the standard AWS provider chains
/// (environment, shared config/credentials files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsSettings {
    /// Region override
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    pub profile: Option<String>,

    /// Custom endpoint, e.g. a VPC interface endpoint
    pub endpoint_url: Option<String>,

    /// Per-operation timeout in seconds
    pub timeout: Option<u64>,

    /// Maximum attempts handed to the SDK retry policy
    pub max_attempts: Option<u32>,
}

impl AwsSettings {
    /// Operation timeout as a duration
    pub fn operation_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Reject values the SDK would accept but that make every call fail.
    pub fn validate(&self) -> Result<()> {
        if self.timeout == Some(0) {
            return Err(Error::Config(
                "aws.timeout must be at least 1 second".to_string(),
            ));
        }
        if self.max_attempts == Some(0) {
            return Err(Error::Config(
                "aws.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default command behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Output format: json, yaml or text
    pub output: String,

    /// Reject missing required parameters instead of warning
    pub strict_required: bool,

    /// Prompt before destructive operations
    pub confirm_destructive: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: "json".to_string(),
            strict_required: true,
            confirm_destructive: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag or RUST_LOG is given
    pub log_level: String,

    /// Log format: text or json
    pub log_format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

/// Color settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Enable colored output
    pub enabled: bool,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// One configuration file as written.
///
/// Every key is optional so that merging can tell a key the file leaves
/// out from one it sets to the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    aws: AwsSettings,
    defaults: DefaultsLayer,
    logging: LoggingLayer,
    colors: ColorsLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DefaultsLayer {
    output: Option<String>,
    strict_required: Option<bool>,
    confirm_destructive: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingLayer {
    log_level: Option<String>,
    log_format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ColorsLayer {
    enabled: Option<bool>,
}

impl Config {
    /// Load configuration from all sources
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Config::default();

        for path in Self::get_config_paths(config_path) {
            if path.exists() {
                config = config.merge_from_file(&path)?;
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Check settings that parse but cannot work.
    pub fn validate(&self) -> Result<()> {
        self.aws.validate()
    }

    /// Get the list of configuration file paths to check
    fn get_config_paths(explicit_path: Option<&PathBuf>) -> Vec<PathBuf> {
        // Explicit path takes priority
        if let Some(path) = explicit_path {
            return vec![path.clone()];
        }

        if let Ok(env_config) = std::env::var("SAGECTL_CONFIG") {
            return vec![PathBuf::from(env_config)];
        }

        let mut paths = vec![PathBuf::from("/etc/sagectl/config.toml")];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".sagectl/config.toml"));
        }

        paths.push(PathBuf::from("sagectl.toml"));

        paths
    }

    /// Merge configuration from a file
    fn merge_from_file(&self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let parsed: std::result::Result<ConfigLayer, String> = match extension {
            "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            "json" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => toml::from_str(&content).map_err(|e| e.to_string()),
        };

        let layer = parsed.map_err(|message| Error::ConfigFile {
            path: path.to_path_buf(),
            message,
        })?;

        Ok(self.merge(layer))
    }

    /// Merge a file layer into this config, keeping every key the layer leaves unset
    fn merge(&self, other: ConfigLayer) -> Config {
        Config {
            aws: AwsSettings {
                region: other.aws.region.or_else(|| self.aws.region.clone()),
                profile: other.aws.profile.or_else(|| self.aws.profile.clone()),
                endpoint_url: other
                    .aws
                    .endpoint_url
                    .or_else(|| self.aws.endpoint_url.clone()),
                timeout: other.aws.timeout.or(self.aws.timeout),
                max_attempts: other.aws.max_attempts.or(self.aws.max_attempts),
            },
            defaults: Defaults {
                output: other
                    .defaults
                    .output
                    .unwrap_or_else(|| self.defaults.output.clone()),
                strict_required: other
                    .defaults
                    .strict_required
                    .unwrap_or(self.defaults.strict_required),
                confirm_destructive: other
                    .defaults
                    .confirm_destructive
                    .unwrap_or(self.defaults.confirm_destructive),
            },
            logging: LoggingConfig {
                log_level: other
                    .logging
                    .log_level
                    .unwrap_or_else(|| self.logging.log_level.clone()),
                log_format: other
                    .logging
                    .log_format
                    .unwrap_or_else(|| self.logging.log_format.clone()),
            },
            colors: ColorsConfig {
                enabled: other.colors.enabled.unwrap_or(self.colors.enabled),
            },
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(region) = std::env::var("SAGECTL_REGION") {
            self.aws.region = Some(region);
        }

        if let Ok(profile) = std::env::var("SAGECTL_PROFILE") {
            self.aws.profile = Some(profile);
        }

        if let Ok(url) = std::env::var("SAGECTL_ENDPOINT_URL") {
            self.aws.endpoint_url = Some(url);
        }

        if let Ok(timeout) = std::env::var("SAGECTL_TIMEOUT") {
            if let Ok(n) = timeout.parse() {
                self.aws.timeout = Some(n);
            }
        }

        if let Ok(attempts) = std::env::var("SAGECTL_MAX_ATTEMPTS") {
            if let Ok(n) = attempts.parse() {
                self.aws.max_attempts = Some(n);
            }
        }

        if let Ok(strict) = std::env::var("SAGECTL_STRICT") {
            self.defaults.strict_required = !matches!(
                strict.to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }

        if let Ok(level) = std::env::var("SAGECTL_LOG_LEVEL") {
            self.logging.log_level = level;
        }

        if std::env::var("NO_COLOR").is_ok() || std::env::var("SAGECTL_NO_COLOR").is_ok() {
            self.colors.enabled = false;
        }
    }

    /// Load from a specific file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = Config::default().merge_from_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }
}
