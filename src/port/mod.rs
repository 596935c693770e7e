//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! Adapters implement them to integrate with external systems.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────────┐                                    ┌──────────────┐
//! │ Generative   │                                    │ Key selector │
//! │ model (HTTP) │                                    │ (host)       │
//! └──────────────┘                                    └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`GenerativeModel`] - Search-grounded structured generation
//! - [`KeySelector`] - Host-managed API key selection

pub mod outbound;

pub use outbound::credential::{ApiKey, KeySelector};
pub use outbound::model::{
    Citation, Generation, GenerationRequest, GenerativeModel, ProviderError, ProviderErrorKind,
};
