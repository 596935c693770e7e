//! Credential source configuration.
//!
//! The API key is never stored in the config file. It comes from an
//! environment variable or from the key file written by `matchsight connect`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::port::ApiKey;

/// Fallback variable consulted when the configured one is unset.
pub const FALLBACK_ENV: &str = "API_KEY";

/// Where to look for the Gemini API key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CredentialConfig {
    /// Environment variable holding the key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Key file path. Defaults to `~/.matchsight/api_key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            api_key_env: default_api_key_env(),
            key_file: None,
        }
    }
}

impl CredentialConfig {
    /// Read the key from the environment.
    ///
    /// The configured variable wins; `API_KEY` is the fallback. Blank values
    /// count as unset.
    #[must_use]
    pub fn env_key(&self) -> Option<ApiKey> {
        self.env_key_with(|name| std::env::var(name).ok())
    }

    /// [`env_key`](Self::env_key) against an arbitrary variable lookup.
    pub fn env_key_with<F>(&self, lookup: F) -> Option<ApiKey>
    where
        F: Fn(&str) -> Option<String>,
    {
        [self.api_key_env.as_str(), FALLBACK_ENV]
            .into_iter()
            .find_map(|name| lookup(name).and_then(ApiKey::new))
    }

    /// Resolved key file path, if a home directory is known.
    #[must_use]
    pub fn key_file_path(&self) -> Option<PathBuf> {
        self.key_file
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".matchsight").join("api_key")))
    }
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}
