//! Provider-agnostic domain types.

pub mod error;
pub mod prediction;
pub mod request;
pub mod sport;

pub use error::DomainError;
pub use prediction::{
    dedup_sources, AnalysisResponse, GroundingSource, PredictionCategory, PredictionItem,
    ProbabilityBand,
};
pub use request::MatchRequest;
pub use sport::{MarketCategory, Sport};
