//! Campaign generation orchestration.
//!
//! Drives the two-stage pipeline (start-frame image, then video ad)
//! over any [`campaign_core::service::GenerativeService`], tracking
//! per-stage status and artifacts and normalizing failures into a
//! single user-facing error message.

pub mod orchestrator;

pub use orchestrator::{CampaignPipeline, StageState, DEFAULT_IMAGE_PROMPT, DEFAULT_VIDEO_PROMPT};
