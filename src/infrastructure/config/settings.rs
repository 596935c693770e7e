//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; every section is
//! optional and falls back to its defaults. The API key never lives here.
//!
//! # Example
//!
//! ```no_run
//! use matchsight::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use super::credential::CredentialConfig;
use super::logging::{LoggingConfig, FORMATS};
use crate::adapter::outbound::gemini::GeminiConfig;
use crate::application::analysis::AnalysisConfig;
use crate::error::{ConfigError, Result};

/// Highest sampling temperature the Gemini API accepts.
const MAX_TEMPERATURE: f64 = 2.0;

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Gemini HTTP endpoint settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Model, temperature and prompt settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// API key sources.
    #[serde(default)]
    pub credential: CredentialConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path`, or return defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Default config location, `~/.matchsight/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".matchsight").join("config.toml"))
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<()> {
        if self.analysis.model.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "model" }.into());
        }
        if !(0.0..=MAX_TEMPERATURE).contains(&self.analysis.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "temperature",
                reason: format!("must be between 0 and {MAX_TEMPERATURE}"),
            }
            .into());
        }
        if self.analysis.explanation_language.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "explanation_language",
            }
            .into());
        }

        if self.gemini.api_base.is_empty() {
            return Err(ConfigError::MissingField { field: "api_base" }.into());
        }
        if let Err(e) = Url::parse(&self.gemini.api_base) {
            return Err(ConfigError::InvalidValue {
                field: "api_base",
                reason: e.to_string(),
            }
            .into());
        }
        if self.gemini.api_version.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "api_version",
            }
            .into());
        }
        if self.gemini.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.gemini.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.credential.api_key_env.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "api_key_env",
            }
            .into());
        }

        if !FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of: {}", FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    /// Render as TOML, for `config show`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Other(e.to_string()).into())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
