//! The two-stage generation state machine.
//!
//! Stage one composes the two input photos into a start-frame image;
//! stage two animates that image into a video ad. Each stage carries
//! its own status and artifact. A successful image run invalidates any
//! previously generated video, since the video was derived from the
//! replaced frame.

use std::sync::Arc;

use campaign_core::friendly::friendly_message;
use campaign_core::service::GenerativeService;
use campaign_core::status::{ArtifactRef, GenerationStatus, ImageInput};

/// Starting prompt for the image stage.
pub const DEFAULT_IMAGE_PROMPT: &str = "High-end UGC perfume campaign. Model holding product in \
     warm, minimalist interior. Soft golden light, high-end beauty photography aesthetic.";

/// Starting prompt for the video stage.
pub const DEFAULT_VIDEO_PROMPT: &str =
    "Cinematic slow motion, high end advertisement, 4k resolution, photorealistic.";

/// Status and artifact of one generation stage.
///
/// A failed re-run keeps the previous artifact; only a successful
/// upstream run clears a stage.
#[derive(Debug, Clone, Default)]
pub struct StageState {
    pub status: GenerationStatus,
    pub artifact: Option<ArtifactRef>,
}

impl StageState {
    fn reset(&mut self) {
        self.status = GenerationStatus::Idle;
        self.artifact = None;
    }
}

/// Orchestrates the campaign pipeline over a generative backend.
pub struct CampaignPipeline {
    service: Arc<dyn GenerativeService>,

    customer: Option<ImageInput>,
    product: Option<ImageInput>,
    image_prompt: String,
    video_prompt: String,

    image: StageState,
    video: StageState,
    /// Most recent normalized failure message, shared by both stages.
    error: Option<String>,
}

impl CampaignPipeline {
    pub fn new(service: Arc<dyn GenerativeService>) -> Self {
        Self {
            service,
            customer: None,
            product: None,
            image_prompt: DEFAULT_IMAGE_PROMPT.to_string(),
            video_prompt: DEFAULT_VIDEO_PROMPT.to_string(),
            image: StageState::default(),
            video: StageState::default(),
            error: None,
        }
    }

    // ---- inputs ----

    pub fn set_customer(&mut self, input: ImageInput) {
        self.customer = Some(input);
    }

    pub fn set_product(&mut self, input: ImageInput) {
        self.product = Some(input);
    }

    pub fn set_image_prompt(&mut self, prompt: impl Into<String>) {
        self.image_prompt = prompt.into();
    }

    pub fn set_video_prompt(&mut self, prompt: impl Into<String>) {
        self.video_prompt = prompt.into();
    }

    pub fn image_prompt(&self) -> &str {
        &self.image_prompt
    }

    pub fn video_prompt(&self) -> &str {
        &self.video_prompt
    }

    // ---- stage state ----

    pub fn image(&self) -> &StageState {
        &self.image
    }

    pub fn video(&self) -> &StageState {
        &self.video
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the image trigger is enabled: both photos present and no
    /// image run in flight.
    pub fn can_generate_image(&self) -> bool {
        self.customer.is_some()
            && self.product.is_some()
            && self.image.status != GenerationStatus::Loading
    }

    /// Whether the video trigger is enabled: a start frame exists and
    /// no video run in flight.
    pub fn can_generate_video(&self) -> bool {
        self.image.artifact.is_some() && self.video.status != GenerationStatus::Loading
    }

    // ---- operations ----

    /// Run the image stage. A no-op when the trigger is disabled.
    ///
    /// On success the video stage is reset: its artifact was derived
    /// from the frame that was just replaced.
    pub async fn generate_image(&mut self) {
        if !self.can_generate_image() {
            tracing::debug!("Image generation request ignored, trigger is disabled");
            return;
        }
        let (customer, product) = match (&self.customer, &self.product) {
            (Some(c), Some(p)) => (c.clone(), p.clone()),
            _ => return,
        };

        self.image.status = GenerationStatus::Loading;
        self.error = None;
        tracing::info!("Generating campaign image");

        let service = Arc::clone(&self.service);
        match service
            .generate_image(&customer, &product, &self.image_prompt)
            .await
        {
            Ok(artifact) => {
                self.image.artifact = Some(artifact);
                self.image.status = GenerationStatus::Success;
                self.video.reset();
                tracing::info!("Campaign image ready, video stage reset");
            }
            Err(e) => {
                self.image.status = GenerationStatus::Error;
                self.error = Some(friendly_message(&e.to_string()));
                tracing::warn!(error = %e, "Image generation failed");
            }
        }
    }

    /// Run the video stage. A no-op when the trigger is disabled.
    pub async fn generate_video(&mut self) {
        if !self.can_generate_video() {
            tracing::debug!("Video generation request ignored, trigger is disabled");
            return;
        }
        let start_frame = match &self.image.artifact {
            Some(frame) => frame.clone(),
            None => return,
        };

        self.video.status = GenerationStatus::Loading;
        self.error = None;
        tracing::info!("Generating video ad");

        let service = Arc::clone(&self.service);
        match service
            .generate_video(&start_frame, &self.video_prompt)
            .await
        {
            Ok(artifact) => {
                self.video.artifact = Some(artifact);
                self.video.status = GenerationStatus::Success;
                tracing::info!("Video ad ready");
            }
            Err(e) => {
                self.video.status = GenerationStatus::Error;
                self.error = Some(friendly_message(&e.to_string()));
                tracing::warn!(error = %e, "Video generation failed");
            }
        }
    }
}
