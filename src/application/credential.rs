//! Credential presence check.
//!
//! The environment key, when present, always wins. Otherwise the host
//! [`KeySelector`] is consulted. Nothing here verifies a key against the
//! provider; a rejected key surfaces later as
//! [`AnalysisError::ReauthNeeded`](crate::error::AnalysisError::ReauthNeeded).

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::port::{ApiKey, KeySelector};

/// Resolves which API key, if any, the next request should use.
pub struct CredentialGate {
    env_key: Option<ApiKey>,
    selector: Option<Arc<dyn KeySelector>>,
}

impl CredentialGate {
    /// Create a gate from an already-read environment key and an optional
    /// host selector.
    pub fn new(env_key: Option<ApiKey>, selector: Option<Arc<dyn KeySelector>>) -> Self {
        Self { env_key, selector }
    }

    /// True when a key was supplied through the environment.
    #[must_use]
    pub fn has_env_key(&self) -> bool {
        self.env_key.is_some()
    }

    /// True when a host selector is available.
    #[must_use]
    pub fn has_selector(&self) -> bool {
        self.selector.is_some()
    }

    /// Load-time readiness check.
    ///
    /// # Errors
    ///
    /// Returns an error if the host selector cannot be queried.
    pub fn check(&self) -> Result<bool> {
        if self.env_key.is_some() {
            return Ok(true);
        }
        match &self.selector {
            Some(selector) => {
                let selected = selector.has_selected_key()?;
                debug!(selector = selector.name(), selected, "Queried key selector");
                Ok(selected)
            }
            None => Ok(false),
        }
    }

    /// Open the host's key-selection flow.
    ///
    /// Returns `false` when no selector is available. A `true` result only
    /// means the flow ran; the key is not verified.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection flow fails.
    pub fn connect(&self) -> Result<bool> {
        let Some(selector) = &self.selector else {
            return Ok(false);
        };
        selector.open_key_selection()?;
        info!(selector = selector.name(), "Key selection completed");
        Ok(true)
    }

    /// The key to use for the next request.
    ///
    /// # Errors
    ///
    /// Returns an error if the host selector cannot be queried.
    pub fn resolve(&self) -> Result<Option<ApiKey>> {
        if let Some(key) = &self.env_key {
            return Ok(Some(key.clone()));
        }
        match &self.selector {
            Some(selector) => selector.selected_key(),
            None => Ok(None),
        }
    }
}
