//! Factory modules for building infrastructure components.
//!
//! Provides factory functions that construct fully-configured components
//! from application configuration. These factories handle dependency
//! injection and wiring.
//!
//! # Submodules
//!
//! - [`model`] - Generative model client and analyzer construction
//! - [`session`] - Credential gate and session construction

pub mod model;
pub mod session;

#[cfg(test)]
mod tests;
