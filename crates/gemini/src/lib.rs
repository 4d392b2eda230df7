//! Gemini client for the campaign canvas engine.
//!
//! Implements [`campaign_core::service::GenerativeService`] against the
//! Google Generative Language API: one-shot `generateContent` image
//! composition plus submit-then-poll Veo video jobs.

pub mod api;
pub mod config;
pub mod media;

pub use api::GeminiApi;
pub use config::GeminiConfig;
