//! Gemini API connection settings.

use serde::{Deserialize, Serialize};

/// HTTP settings for the Gemini `generateContent` endpoint.
///
/// The API key is never read from this file; see
/// [`CredentialConfig`](crate::infrastructure::config::credential::CredentialConfig).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// Base URL of the Generative Language API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// API version path segment.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Whole-request timeout in milliseconds. Grounded generation is slow.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_version: default_api_version(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".into()
}

fn default_api_version() -> String {
    "v1beta".into()
}

const fn default_timeout_ms() -> u64 {
    180_000
}

const fn default_connect_timeout_ms() -> u64 {
    10_000
}
