//! matchsight - search-grounded match predictions.
//!
//! Collects a fixture (home team, away team, optional league, sport), asks
//! Gemini for a structured prediction grounded in Google Search results and
//! renders the per-market probabilities with the cited sources.
//!
//! # Architecture
//!
//! - [`domain`] - Requests, sports and their market taxonomies, predictions
//! - [`port`] - Outbound traits: the generative model and the key selector
//! - [`application`] - Prompt and schema construction, analysis, credential
//!   gate and session state
//! - [`adapter`] - Gemini REST client, key file selector and the CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use matchsight::domain::{MatchRequest, Sport};
//! use matchsight::infrastructure::config::settings::Config;
//! use matchsight::infrastructure::factory::session::build_session;
//!
//! # async fn demo() -> matchsight::error::Result<()> {
//! let config = Config::default();
//! let session = build_session(&config)?;
//! let request = MatchRequest::try_new("Arsenal", "Chelsea")?
//!     .with_league("Premier League")
//!     .with_sport(Sport::Football);
//! let response = session.submit(&request).await?;
//! println!("{} markets", response.market_count());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
