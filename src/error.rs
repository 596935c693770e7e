use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Marker message for credential failures.
///
/// Callers match on [`AnalysisError::ReauthNeeded`]; the message is kept
/// stable for JSON consumers that only see the text.
pub const REAUTH_NEEDED: &str = "REAUTH_NEEDED";

/// Message shown when the model returns no usable text.
pub const EMPTY_RESPONSE: &str = "Analysis failed. Please try again.";

/// Analysis errors surfaced to the presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The provider answered without a text payload.
    #[error("{}", EMPTY_RESPONSE)]
    EmptyResponse,

    /// The credential was rejected; the caller should prompt for a new key.
    #[error("{}", REAUTH_NEEDED)]
    ReauthNeeded,

    /// Any other provider failure, message preserved verbatim.
    #[error("{message}")]
    Provider {
        /// HTTP status, when the failure came from an HTTP response.
        status: Option<u16>,
        /// Provider status string (e.g. `INVALID_ARGUMENT`), when present.
        code: Option<String>,
        message: String,
    },
}

impl AnalysisError {
    /// Build a provider error from a bare message.
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            status: None,
            code: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_reauth(&self) -> bool {
        matches!(self, Self::ReauthNeeded)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// True when this error asks the user to select a new credential.
    #[must_use]
    pub fn is_reauth(&self) -> bool {
        matches!(self, Error::Analysis(e) if e.is_reauth())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
