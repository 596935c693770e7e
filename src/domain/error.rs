//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors and parsers that
//! validate user input before any outbound call is made.
//!
//! # Examples
//!
//! ```
//! use matchsight::domain::error::DomainError;
//! use matchsight::domain::request::MatchRequest;
//!
//! let result = MatchRequest::try_new("  ", "Chelsea");
//! assert!(matches!(result, Err(DomainError::EmptyHomeTeam)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The home identifier was empty or whitespace.
    #[error("home team cannot be empty")]
    EmptyHomeTeam,

    /// The away identifier was empty or whitespace.
    #[error("away team cannot be empty")]
    EmptyAwayTeam,

    /// The sport selector did not match any supported sport.
    #[error("unknown sport '{name}' (expected one of: {expected})")]
    UnknownSport {
        /// The rejected input.
        name: String,
        /// Comma-separated list of accepted sport names.
        expected: String,
    },
}
