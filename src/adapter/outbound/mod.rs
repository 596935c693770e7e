//! Outbound adapters (driven side).

pub mod gemini;
pub mod keyfile;
