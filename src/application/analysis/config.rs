//! Analysis service configuration.

use serde::{Deserialize, Serialize};

use crate::domain::Sport;

/// Configuration for the match analysis service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature. Kept low for consistent probabilities.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Language the model must write explanations in.
    #[serde(default = "default_language")]
    pub explanation_language: String,
    /// Sport used when a request does not name one.
    #[serde(default)]
    pub default_sport: Sport,
    /// Enable search grounding.
    #[serde(default = "default_web_search")]
    pub web_search: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            explanation_language: default_language(),
            default_sport: Sport::default(),
            web_search: default_web_search(),
        }
    }
}

fn default_model() -> String {
    "gemini-3-pro-preview".into()
}

const fn default_temperature() -> f64 {
    0.2
}

fn default_language() -> String {
    "Bengali".into()
}

const fn default_web_search() -> bool {
    true
}
