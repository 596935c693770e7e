//! Credential and session factory.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::adapter::outbound::keyfile::KeyFileSelector;
use crate::application::analysis::Analyzer;
use crate::application::credential::CredentialGate;
use crate::application::session::Session;
use crate::error::Result;
use crate::infrastructure::factory::model::{build_analyzer, build_model};
use crate::infrastructure::config::settings::Config;
use crate::port::KeySelector;

/// Build the key-file selector.
///
/// Returns `None` when no key file path can be resolved (no home directory
/// and none configured).
pub fn build_key_selector(config: &Config) -> Option<Arc<dyn KeySelector>> {
    let Some(path) = config.credential.key_file_path() else {
        warn!("No home directory and no credential.key_file, key selection disabled");
        return None;
    };
    debug!(path = %path.display(), "Key file selector");
    Some(Arc::new(KeyFileSelector::new(path)))
}

/// Build the credential gate from the environment and the given selector.
pub fn build_credentials(
    config: &Config,
    selector: Option<Arc<dyn KeySelector>>,
) -> CredentialGate {
    let env_key = config.credential.env_key();
    if env_key.is_some() {
        debug!(var = %config.credential.api_key_env, "Using API key from environment");
    }
    CredentialGate::new(env_key, selector)
}

/// Build a session over `analyzer` with the default credential sources.
pub fn build_session_with(config: &Config, analyzer: Analyzer) -> Session {
    let credentials = build_credentials(config, build_key_selector(config));
    Session::new(analyzer, credentials)
}

/// Build a fully wired session: Gemini client, analyzer and credentials.
///
/// # Errors
///
/// Returns an error if the model client cannot be built.
pub fn build_session(config: &Config) -> Result<Session> {
    let model = build_model(config)?;
    Ok(build_session_with(config, build_analyzer(config, model)))
}
