//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the generative
//! model service and the host's credential helper.

pub mod credential;
pub mod model;
