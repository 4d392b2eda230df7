//! Contract with the external generative service.
//!
//! The orchestrator only ever sees this trait: one call per stage, each
//! resolving to an artifact or a [`ServiceError`]. The video call is
//! long-running on the provider side (submit-then-poll) but appears
//! here as a single asynchronous operation. There is no cancellation —
//! once a call is in flight it runs to completion.

use async_trait::async_trait;

use crate::status::{ArtifactRef, ImageInput};

/// Failures surfaced by a generative service implementation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Request failed: {0}")]
    Request(String),

    /// The service returned a non-2xx status code.
    #[error("Service error ({status}): {body}")]
    Api {
        /// HTTP status code (or provider error code for async jobs).
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The model returned a response with no image payload. Surfaced as
    /// an explicit failure rather than an empty success.
    #[error("No image generated. The model may have filtered the response due to safety policies.")]
    SafetyFiltered,

    /// A long-running job finished without producing a video URI.
    #[error("No video URI returned")]
    MissingOutput,
}

/// Asynchronous image and video synthesis.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Compose a campaign still from the customer and product photos
    /// plus a text prompt.
    async fn generate_image(
        &self,
        customer: &ImageInput,
        product: &ImageInput,
        prompt: &str,
    ) -> Result<ArtifactRef, ServiceError>;

    /// Animate a start frame into a short clip. Resolves only once the
    /// provider-side job completes or fails.
    async fn generate_video(
        &self,
        start_frame: &ArtifactRef,
        prompt: &str,
    ) -> Result<ArtifactRef, ServiceError>;
}
