//! Match analysis use case.
//!
//! Builds the prompt and schema for a [`MatchRequest`](crate::domain::MatchRequest),
//! issues one call through the [`GenerativeModel`](crate::port::GenerativeModel)
//! port and parses the answer into an
//! [`AnalysisResponse`](crate::domain::AnalysisResponse).

pub mod analyzer;
pub mod config;
pub mod prompt;
pub mod schema;

pub use analyzer::{classify, Analyzer};
pub use config::AnalysisConfig;
