//! Prediction data returned by an analysis.
//!
//! These are pure data-transfer shapes. Field names serialize in camelCase
//! so the same types describe both the model's JSON output and the
//! `--json` output of the CLI.

use serde::{Deserialize, Serialize};

/// A single market with its estimated probability.
///
/// `probability` is expected in `0..=100` but is neither validated nor
/// clamped; the value is shown exactly as the model produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionItem {
    pub market_name: String,
    pub probability: f64,
    pub explanation: String,
}

impl PredictionItem {
    #[must_use]
    pub fn band(&self) -> ProbabilityBand {
        ProbabilityBand::from_probability(self.probability)
    }
}

/// A titled group of prediction items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionCategory {
    pub title: String,
    #[serde(default)]
    pub items: Vec<PredictionItem>,
}

impl PredictionCategory {
    /// The item with the highest probability, first one wins ties.
    #[must_use]
    pub fn strongest(&self) -> Option<&PredictionItem> {
        self.items.iter().fold(None, |best, item| match best {
            Some(current) if current.probability >= item.probability => Some(current),
            _ => Some(item),
        })
    }
}

/// A web page the model cited while answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

impl GroundingSource {
    /// Title used when the citation does not carry one.
    pub const UNTITLED: &'static str = "Web Source";

    #[must_use]
    pub fn new(title: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uri: uri.into(),
        }
    }
}

/// Complete result of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub home_team: String,
    pub away_team: String,
    /// Sport tag echoed by the model, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default)]
    pub categories: Vec<PredictionCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GroundingSource>>,
}

impl AnalysisResponse {
    /// Number of markets across all categories.
    #[must_use]
    pub fn market_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Attach citations, keeping one entry per URI.
    ///
    /// The surviving title for a URI is the last one seen; entries keep the
    /// position of the URI's first appearance.
    pub fn attach_sources<I>(&mut self, sources: I)
    where
        I: IntoIterator<Item = GroundingSource>,
    {
        self.sources = Some(dedup_sources(sources));
    }
}

/// Deduplicate sources by URI with last-write-wins titles.
#[must_use]
pub fn dedup_sources<I>(sources: I) -> Vec<GroundingSource>
where
    I: IntoIterator<Item = GroundingSource>,
{
    let mut unique: Vec<GroundingSource> = Vec::new();
    for source in sources {
        match unique.iter_mut().find(|s| s.uri == source.uri) {
            Some(existing) => existing.title = source.title,
            None => unique.push(source),
        }
    }
    unique
}

/// Coarse confidence band used to colour probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityBand {
    /// 80 and above.
    Strong,
    /// 60 to 79.
    Likely,
    /// 40 to 59.
    Even,
    /// Below 40.
    Weak,
}

impl ProbabilityBand {
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 80.0 {
            Self::Strong
        } else if probability >= 60.0 {
            Self::Likely
        } else if probability >= 40.0 {
            Self::Even
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Likely => "likely",
            Self::Even => "even",
            Self::Weak => "weak",
        }
    }
}
