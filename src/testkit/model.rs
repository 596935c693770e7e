//! Mock [`GenerativeModel`] for testing.
//!
//! [`ScriptedModel`] returns pre-loaded outcomes in call order (the last
//! outcome repeats once the script is exhausted) and records every request
//! and key it receives.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::port::{
    ApiKey, Citation, Generation, GenerationRequest, GenerativeModel, ProviderError,
};

type Outcome = std::result::Result<Generation, ProviderError>;

/// A model with scripted outcomes and optional per-call delays.
pub struct ScriptedModel {
    outcomes: Vec<Outcome>,
    delays: Vec<Duration>,
    calls: Mutex<Vec<GenerationRequest>>,
    keys: Mutex<Vec<String>>,
}

impl ScriptedModel {
    /// Script a sequence of outcomes, one per call.
    ///
    /// # Panics
    ///
    /// Panics if `outcomes` is empty.
    pub fn sequence(outcomes: Vec<Outcome>) -> Self {
        assert!(!outcomes.is_empty(), "ScriptedModel needs at least one outcome");
        Self {
            outcomes,
            delays: Vec::new(),
            calls: Mutex::new(Vec::new()),
            keys: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with the given text and no citations.
    pub fn text(text: &str) -> Self {
        Self::sequence(vec![Ok(Generation {
            text: Some(text.to_string()),
            citations: None,
        })])
    }

    /// Always answer without a text payload.
    pub fn no_text() -> Self {
        Self::sequence(vec![Ok(Generation::default())])
    }

    /// Always fail with the given error.
    pub fn failing(error: ProviderError) -> Self {
        Self::sequence(vec![Err(error)])
    }

    /// Attach citations to every successful outcome.
    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        for generation in self.outcomes.iter_mut().flatten() {
            generation.citations = Some(citations.clone());
        }
        self
    }

    /// Delay the n-th call by `delays[n]` (no delay past the end).
    pub fn with_delays(mut self, delays: Vec<Duration>) -> Self {
        self.delays = delays;
        self
    }

    /// Requests received so far, in call order.
    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().clone()
    }

    /// Raw keys received so far, in call order.
    pub fn keys_seen(&self) -> Vec<String> {
        self.keys.lock().clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> std::result::Result<Generation, ProviderError> {
        let index = {
            let mut calls = self.calls.lock();
            calls.push(request.clone());
            self.keys.lock().push(api_key.expose().to_string());
            calls.len() - 1
        };

        if let Some(delay) = self.delays.get(index) {
            tokio::time::sleep(*delay).await;
        }

        let outcome = self
            .outcomes
            .get(index)
            .or_else(|| self.outcomes.last())
            .cloned();
        outcome.unwrap_or_else(|| Err(ProviderError::other("script exhausted")))
    }
}
