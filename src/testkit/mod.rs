//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`model`]: [`ScriptedModel`](model::ScriptedModel), a mock
//!   [`GenerativeModel`](crate::port::GenerativeModel).
//! - [`selector`]: [`MemorySelector`](selector::MemorySelector), a mock
//!   [`KeySelector`](crate::port::KeySelector).
//! - [`fixtures`]: Canned match requests and model answers.
//! - [`config`]: Canonical test configurations.

pub mod config;
pub mod fixtures;
pub mod model;
pub mod selector;
