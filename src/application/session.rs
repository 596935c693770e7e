//! Interactive session state.
//!
//! [`Session`] is the single owner of the displayed state: loading flag,
//! error banner, last result and credential readiness. Only the submit
//! handler and the credential handlers write to it.
//!
//! There is no request fencing. Concurrent submissions each write their
//! outcome when they finish, so the last one to complete wins. A failed
//! submission sets the error but leaves the previous result in place.

use parking_lot::RwLock;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use super::analysis::Analyzer;
use super::credential::CredentialGate;
use crate::domain::{AnalysisResponse, MatchRequest};
use crate::error::{AnalysisError, Result};

/// Banner shown after the provider rejects the credential.
pub const REAUTH_MESSAGE: &str =
    "Your AI session expired or the API key is invalid. Please reconnect.";

/// Banner shown when an error carries no message.
const FALLBACK_MESSAGE: &str = "Analysis failed. Please check your connection.";

/// Snapshot of the displayed state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResponse>,
    pub has_key: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            result: None,
            has_key: true,
        }
    }
}

/// Top-level state holder for one interactive run.
pub struct Session {
    analyzer: Analyzer,
    credentials: CredentialGate,
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(analyzer: Analyzer, credentials: CredentialGate) -> Self {
        Self {
            analyzer,
            credentials,
            state: RwLock::new(SessionState::default()),
        }
    }

    #[must_use]
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    #[must_use]
    pub fn credentials(&self) -> &CredentialGate {
        &self.credentials
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    /// True when the connection screen should be shown instead of the form.
    #[must_use]
    pub fn needs_connection(&self) -> bool {
        !self.state.read().has_key && !self.credentials.has_env_key()
    }

    /// Load-time credential check.
    ///
    /// Without an environment key the selector decides; a selector failure
    /// is treated as "no key".
    pub fn check_credentials(&self) -> bool {
        if self.credentials.has_env_key() {
            return self.state.read().has_key;
        }
        let has_key = match self.credentials.check() {
            Ok(has_key) => has_key,
            Err(e) => {
                warn!(error = %e, "Credential check failed");
                false
            }
        };
        self.state.write().has_key = has_key;
        has_key
    }

    /// Run the key-selection flow and optimistically mark the key present.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection flow fails; state is unchanged.
    pub fn connect(&self) -> Result<bool> {
        let opened = self.credentials.connect()?;
        if opened {
            let mut state = self.state.write();
            state.has_key = true;
            state.error = None;
        }
        Ok(opened)
    }

    /// Force the connection screen on the next render.
    pub fn reset_credentials(&self) {
        self.state.write().has_key = false;
    }

    /// Submit one analysis and record its outcome.
    ///
    /// # Errors
    ///
    /// Returns the analysis error after recording it in state.
    pub async fn submit(&self, request: &MatchRequest) -> Result<AnalysisResponse> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("analysis", %request_id, fixture = %request.fixture());

        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let outcome = self.run(request).instrument(span).await;

        let mut state = self.state.write();
        state.loading = false;
        match &outcome {
            Ok(response) => {
                info!(%request_id, markets = response.market_count(), "Analysis stored");
                state.result = Some(response.clone());
            }
            Err(e) if e.is_reauth() => {
                state.has_key = false;
                state.error = Some(REAUTH_MESSAGE.to_string());
            }
            Err(e) => {
                let message = e.to_string();
                state.error = Some(if message.is_empty() {
                    FALLBACK_MESSAGE.to_string()
                } else {
                    message
                });
            }
        }
        outcome
    }

    async fn run(&self, request: &MatchRequest) -> Result<AnalysisResponse> {
        let Some(key) = self.credentials.resolve()? else {
            warn!("No API key available");
            return Err(AnalysisError::ReauthNeeded.into());
        };
        self.analyzer.analyze(&key, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::application::analysis::AnalysisConfig;
    use crate::port::{ApiKey, Generation, ProviderError};
    use crate::testkit::fixtures;
    use crate::testkit::model::ScriptedModel;
    use crate::testkit::selector::MemorySelector;

    fn session(model: Arc<ScriptedModel>, env_key: Option<&str>) -> Session {
        Session::new(
            Analyzer::new(model, AnalysisConfig::default()),
            CredentialGate::new(env_key.and_then(ApiKey::new), None),
        )
    }

    fn ok(text: &str) -> std::result::Result<Generation, ProviderError> {
        Ok(Generation {
            text: Some(text.to_string()),
            citations: None,
        })
    }

    #[tokio::test]
    async fn success_stores_result() {
        let model = Arc::new(ScriptedModel::text(fixtures::ARSENAL_CHELSEA_JSON));
        let session = session(model, Some("key"));

        session.submit(&fixtures::arsenal_chelsea()).await.unwrap();

        let state = session.snapshot();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.result.unwrap().home_team, "Arsenal");
    }

    #[tokio::test]
    async fn failure_keeps_previous_result() {
        let model = Arc::new(ScriptedModel::sequence(vec![
            ok(fixtures::ARSENAL_CHELSEA_JSON),
            Err(ProviderError::other("Service unavailable")),
        ]));
        let session = session(model, Some("key"));

        session.submit(&fixtures::arsenal_chelsea()).await.unwrap();
        assert!(session.submit(&fixtures::spurs_liverpool()).await.is_err());

        let state = session.snapshot();
        assert_eq!(state.error.as_deref(), Some("Service unavailable"));
        assert_eq!(state.result.unwrap().home_team, "Arsenal");
    }

    #[tokio::test]
    async fn reauth_flips_key_state() {
        let model = Arc::new(ScriptedModel::failing(ProviderError::other("API_KEY invalid")));
        let selector = Arc::new(MemorySelector::with_key("stale"));
        let session = Session::new(
            Analyzer::new(model, AnalysisConfig::default()),
            CredentialGate::new(None, Some(selector)),
        );

        let err = session.submit(&fixtures::arsenal_chelsea()).await.unwrap_err();
        assert!(err.is_reauth());

        let state = session.snapshot();
        assert!(!state.has_key);
        assert_eq!(state.error.as_deref(), Some(REAUTH_MESSAGE));
        assert!(session.needs_connection());
    }

    #[tokio::test]
    async fn missing_key_is_reauth_without_calling_model() {
        let model = Arc::new(ScriptedModel::text(fixtures::ARSENAL_CHELSEA_JSON));
        let session = session(model.clone(), None);

        let err = session.submit(&fixtures::arsenal_chelsea()).await.unwrap_err();
        assert!(err.is_reauth());
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn connect_is_optimistic_and_clears_error() {
        let model = Arc::new(ScriptedModel::failing(ProviderError::other("API_KEY invalid")));
        let selector = Arc::new(MemorySelector::with_key("stale"));
        let session = Session::new(
            Analyzer::new(model.clone(), AnalysisConfig::default()),
            CredentialGate::new(None, Some(selector.clone())),
        );

        let _ = session.submit(&fixtures::arsenal_chelsea()).await;
        assert!(session.connect().unwrap());

        let state = session.snapshot();
        assert!(state.has_key);
        assert!(state.error.is_none());
        assert_eq!(selector.opened(), 1);

        // The next request re-verifies lazily and fails again.
        let _ = session.submit(&fixtures::arsenal_chelsea()).await;
        assert!(!session.snapshot().has_key);
        assert_eq!(model.calls().len(), 2);
    }

    #[tokio::test]
    async fn env_key_never_needs_connection() {
        let model = Arc::new(ScriptedModel::failing(ProviderError::other("API_KEY invalid")));
        let session = session(model, Some("key"));

        let _ = session.submit(&fixtures::arsenal_chelsea()).await;
        assert!(!session.snapshot().has_key);
        assert!(!session.needs_connection());
    }

    #[tokio::test]
    async fn check_credentials_uses_selector() {
        let model = Arc::new(ScriptedModel::no_text());
        let session = Session::new(
            Analyzer::new(model, AnalysisConfig::default()),
            CredentialGate::new(None, Some(Arc::new(MemorySelector::empty()))),
        );

        assert!(!session.check_credentials());
        assert!(session.needs_connection());
    }

    #[tokio::test]
    async fn reset_credentials_returns_to_connection_screen() {
        let model = Arc::new(ScriptedModel::text(fixtures::ARSENAL_CHELSEA_JSON));
        let selector = Arc::new(MemorySelector::with_key("current").selecting("replacement"));
        let session = Session::new(
            Analyzer::new(model.clone(), AnalysisConfig::default()),
            CredentialGate::new(None, Some(selector.clone())),
        );

        assert!(session.check_credentials());
        session.submit(&fixtures::arsenal_chelsea()).await.unwrap();
        assert!(!session.needs_connection());

        session.reset_credentials();
        assert!(session.needs_connection());
        assert!(session.snapshot().result.is_some());

        assert!(session.connect().unwrap());
        assert!(!session.needs_connection());
        session.submit(&fixtures::arsenal_chelsea()).await.unwrap();
        assert_eq!(
            model.keys_seen(),
            vec!["current".to_string(), "replacement".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn last_completed_response_wins() {
        let model = Arc::new(
            ScriptedModel::sequence(vec![
                ok(fixtures::ARSENAL_CHELSEA_JSON),
                ok(fixtures::SPURS_LIVERPOOL_JSON),
            ])
            .with_delays(vec![Duration::from_millis(200), Duration::from_millis(10)]),
        );
        let session = session(model, Some("key"));

        let first = fixtures::arsenal_chelsea();
        let second = fixtures::spurs_liverpool();
        let (a, b) = tokio::join!(session.submit(&first), session.submit(&second));
        assert!(a.is_ok() && b.is_ok());

        // The slower first call completed last and overwrote the second.
        let state = session.snapshot();
        assert_eq!(state.result.unwrap().home_team, "Arsenal");
        assert!(!state.loading);
    }
}
