//! Miette diagnostics for CLI error presentation.
//!
//! [`report`] turns a crate [`Error`] into a [`miette::Report`] with a code,
//! help text and, for TOML syntax errors, the offending span of the file.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::adapter::inbound::cli::analyze::API_KEY_FIELD;
use crate::domain::DomainError;
use crate::error::{AnalysisError, ConfigError as ConfigErrorKind, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(matchsight::config))]
pub struct ConfigError {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    #[must_use]
    pub fn new(message: impl Into<String>, src: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// The provider rejected the API key, or none is configured.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(matchsight::credential),
    help("run `matchsight connect` or set GEMINI_API_KEY")
)]
pub struct CredentialError {
    pub message: String,
}

impl CredentialError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Any other failure, with optional help.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(matchsight::error))]
pub struct CommandError {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

impl CommandError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Convert a crate error into a rendered diagnostic.
///
/// `config_src` is the text of the config file when the failure came from
/// loading it; TOML syntax errors then point at the offending span.
#[must_use]
pub fn report(error: Error, config_src: Option<&str>) -> miette::Report {
    match error {
        Error::Analysis(AnalysisError::ReauthNeeded) => {
            miette::Report::new(CredentialError::new(crate::application::session::REAUTH_MESSAGE))
        }
        Error::Config(ConfigErrorKind::Parse(parse)) => {
            let message = parse.message().to_string();
            match (config_src, parse.span()) {
                (Some(src), Some(span)) => miette::Report::new(
                    ConfigError::new(message, src, span.start, span.end - span.start)
                        .with_help("fix the TOML syntax, or run `matchsight config init --force`"),
                ),
                _ => miette::Report::new(CommandError::new(format!(
                    "failed to parse config: {message}"
                ))),
            }
        }
        Error::Config(ConfigErrorKind::MissingField { field: API_KEY_FIELD }) => {
            miette::Report::new(CredentialError::new("no API key found"))
        }
        Error::Config(err @ ConfigErrorKind::ReadFile(_)) => miette::Report::new(
            CommandError::new(err.to_string())
                .with_help("create one with `matchsight config init`"),
        ),
        Error::Config(err) => miette::Report::new(
            CommandError::new(err.to_string())
                .with_help("run `matchsight config validate` for details"),
        ),
        Error::Domain(err @ DomainError::UnknownSport { .. }) => miette::Report::new(
            CommandError::new(err.to_string()).with_help("run `matchsight sports` to list them"),
        ),
        Error::Http(err) => miette::Report::new(
            CommandError::new(format!("request failed: {err}"))
                .with_help("check your network connection"),
        ),
        other => miette::Report::new(CommandError::new(other.to_string())),
    }
}
