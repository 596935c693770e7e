//! Model-backed match analyzer.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::config::AnalysisConfig;
use super::prompt::build_prompt;
use super::schema::{response_schema, RESPONSE_MIME_TYPE};
use crate::domain::{AnalysisResponse, GroundingSource, MatchRequest};
use crate::error::{AnalysisError, Error, Result};
use crate::port::{
    ApiKey, Citation, GenerationRequest, GenerativeModel, ProviderError, ProviderErrorKind,
};

/// Message fragments that mark a credential failure when the provider gives
/// no structured signal. This is a known fragility: wording changes on the
/// provider side silently turn reauth prompts into plain errors.
const CREDENTIAL_MARKERS: [&str; 2] = ["not found", "API_KEY"];

/// Translates match requests into generation calls and back.
pub struct Analyzer {
    model: Arc<dyn GenerativeModel>,
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create a new analyzer.
    pub fn new(model: Arc<dyn GenerativeModel>, config: AnalysisConfig) -> Self {
        Self { model, config }
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Build the generation request for a match.
    #[must_use]
    pub fn generation_request(&self, request: &MatchRequest) -> GenerationRequest {
        GenerationRequest {
            model: self.config.model.clone(),
            prompt: build_prompt(request, &self.config.explanation_language),
            web_search: self.config.web_search,
            response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            response_schema: response_schema(),
            temperature: self.config.temperature,
        }
    }

    /// Run one analysis.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::EmptyResponse`] when the model returns no text
    /// - [`AnalysisError::ReauthNeeded`] when the credential is rejected
    /// - [`AnalysisError::Provider`] for any other provider failure
    /// - [`Error::Parse`] when the text is not a valid analysis object
    pub async fn analyze(
        &self,
        api_key: &ApiKey,
        request: &MatchRequest,
    ) -> Result<AnalysisResponse> {
        let generation_request = self.generation_request(request);
        info!(
            provider = self.model.name(),
            model = %generation_request.model,
            fixture = %request.fixture(),
            sport = %request.sport(),
            "Requesting analysis"
        );

        let generation = match self.model.generate(api_key, &generation_request).await {
            Ok(generation) => generation,
            Err(err) => {
                warn!(
                    provider = self.model.name(),
                    status = ?err.status,
                    code = ?err.code,
                    error = %err,
                    "Analysis error"
                );
                return Err(classify(err).into());
            }
        };

        let text = match generation.text.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => {
                warn!(provider = self.model.name(), "Model returned no text");
                return Err(AnalysisError::EmptyResponse.into());
            }
        };

        let mut response = parse_response(text)?;
        if let Some(citations) = generation.citations {
            response.attach_sources(web_sources(citations));
        }

        debug!(
            categories = response.categories.len(),
            markets = response.market_count(),
            sources = response.sources.as_ref().map_or(0, Vec::len),
            "Analysis complete"
        );
        Ok(response)
    }
}

/// Map a provider failure onto the analysis error taxonomy.
///
/// A structured credential signal from the adapter wins; otherwise the
/// message is matched against [`CREDENTIAL_MARKERS`].
#[must_use]
pub fn classify(err: ProviderError) -> AnalysisError {
    if err.kind == ProviderErrorKind::Credential || is_credential_message(&err.message) {
        return AnalysisError::ReauthNeeded;
    }
    AnalysisError::Provider {
        status: err.status,
        code: err.code,
        message: err.message,
    }
}

fn is_credential_message(message: &str) -> bool {
    CREDENTIAL_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

/// Keep web citations only; untitled pages get a placeholder title.
fn web_sources(citations: Vec<Citation>) -> Vec<GroundingSource> {
    citations
        .into_iter()
        .filter_map(|citation| match citation {
            Citation::Web { uri, title } => Some(GroundingSource::new(
                title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| GroundingSource::UNTITLED.to_string()),
                uri,
            )),
            Citation::Other => None,
        })
        .collect()
}

fn parse_response(text: &str) -> Result<AnalysisResponse> {
    let json = strip_code_fence(text);
    serde_json::from_str(json).map_err(|e| Error::Parse(format!("Invalid analysis JSON: {e}")))
}

/// Some models wrap JSON in a markdown fence even in JSON mode.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
