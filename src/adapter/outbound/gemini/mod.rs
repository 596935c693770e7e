//! Google Gemini adapter.
//!
//! Implements [`GenerativeModel`](crate::port::GenerativeModel) on top of the
//! `generateContent` REST endpoint with the Google Search tool enabled.

pub mod client;
pub mod dto;
pub mod settings;

pub use client::Gemini;
pub use settings::GeminiConfig;
