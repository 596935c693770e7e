//! Infrastructure configuration modules.

pub mod credential;
pub mod logging;
pub mod settings;
