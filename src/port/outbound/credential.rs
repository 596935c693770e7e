//! Credential port.
//!
//! The primary credential is an API key read from the environment. When it
//! is absent, a host-provided [`KeySelector`] reports whether a key has been
//! selected and can open a selection flow.

use std::fmt;

use crate::error::Result;

/// An API key. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, returning `None` for blank input.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        (!key.is_empty()).then_some(Self(key))
    }

    /// Expose the raw key for the outbound request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Host helper that manages a user-selected key.
pub trait KeySelector: Send + Sync {
    /// Return the selector name for logging.
    fn name(&self) -> &'static str;

    /// Whether a key has been selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot be queried.
    fn has_selected_key(&self) -> Result<bool>;

    /// Run the host's key-selection flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the flow fails or is aborted.
    fn open_key_selection(&self) -> Result<()>;

    /// The currently selected key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot be queried.
    fn selected_key(&self) -> Result<Option<ApiKey>>;
}
