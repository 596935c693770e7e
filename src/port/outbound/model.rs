//! Generative model port.
//!
//! Defines a provider-neutral interface for one search-grounded,
//! schema-constrained generation call. The analyzer builds a
//! [`GenerationRequest`]; adapters translate it to a provider's wire format
//! and return a [`Generation`] or a structured [`ProviderError`].

use std::fmt;

use async_trait::async_trait;

use super::credential::ApiKey;

/// One structured generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Model identifier (e.g. `gemini-3-pro-preview`).
    pub model: String,
    /// Natural-language instruction sent as a single user turn.
    pub prompt: String,
    /// Enable the provider's web search tool for grounding.
    pub web_search: bool,
    /// MIME type the model must answer in.
    pub response_mime_type: String,
    /// Output schema in the provider's OpenAPI-subset dialect.
    pub response_schema: serde_json::Value,
    /// Sampling temperature.
    pub temperature: f64,
}

/// A citation attached to the generated answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Citation {
    /// A web page found through search.
    Web { uri: String, title: Option<String> },
    /// Any non-web grounding chunk (retrieved context, maps, ...).
    Other,
}

/// Result of a generation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    /// Concatenated text payload of the first candidate, if any.
    pub text: Option<String>,
    /// Grounding citations of the first candidate, in provider order.
    /// `None` when the provider returned no grounding chunks at all.
    pub citations: Option<Vec<Citation>>,
}

/// How a provider failure should be treated by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    /// The provider reported a structured authentication failure.
    Credential,
    /// Transport failure before a response was received.
    Transport,
    /// Anything else.
    Other,
}

/// Failure reported by a model adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    /// HTTP status when the failure came from a response.
    pub status: Option<u16>,
    /// Provider status string, e.g. `PERMISSION_DENIED`.
    pub code: Option<String>,
    /// Provider message, kept verbatim.
    pub message: String,
}

impl ProviderError {
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Other,
            status: None,
            code: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Transport,
            ..Self::other(message)
        }
    }

    #[must_use]
    pub fn credential(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Credential,
            ..Self::other(message)
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ProviderError {}

/// Client for a search-grounded generative model.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// behind an `Arc` by the session and CLI handlers.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Issue exactly one generation call.
    ///
    /// The credential is passed per call so a freshly selected key takes
    /// effect on the next request without rebuilding the client.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] for transport failures and non-success
    /// responses.
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> Result<Generation, ProviderError>;
}
