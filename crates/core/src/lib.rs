//! Pure domain logic for the campaign canvas engine.
//!
//! This crate has zero internal dependencies so the geometry types, the
//! generation status model, and the generative-service contract can be
//! shared by the board, gemini, and pipeline crates:
//!
//! - [`geometry`] / [`connector`] — panel rectangles and the derived
//!   curve geometry drawn between them.
//! - [`panel`] / [`layout`] — the six fixed panel roles and their
//!   starting positions.
//! - [`status`] / [`service`] — stage status, artifact references, and
//!   the async contract with the external generative service.
//! - [`friendly`] — normalization of raw failure text into short
//!   user-presentable messages.

pub mod connector;
pub mod error;
pub mod friendly;
pub mod geometry;
pub mod layout;
pub mod panel;
pub mod service;
pub mod status;

pub use error::CoreError;
