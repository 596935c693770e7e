//! Generative model factory.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::gemini::Gemini;
use crate::application::analysis::Analyzer;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::GenerativeModel;

/// Build the Gemini client from configuration.
///
/// # Errors
///
/// Returns an error if the configured base URL is invalid or the HTTP client
/// cannot be built.
pub fn build_model(config: &Config) -> Result<Arc<dyn GenerativeModel>> {
    let client: Arc<dyn GenerativeModel> = Arc::new(Gemini::new(&config.gemini)?);
    info!(
        provider = client.name(),
        model = %config.analysis.model,
        "Model client initialized"
    );
    Ok(client)
}

/// Build the analyzer over an already-built model.
#[must_use]
pub fn build_analyzer(config: &Config, model: Arc<dyn GenerativeModel>) -> Analyzer {
    Analyzer::new(model, config.analysis.clone())
}
