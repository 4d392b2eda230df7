//! Behavioral tests for the two-stage campaign pipeline, driven
//! through a scripted in-memory backend.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;

use campaign_core::friendly::QUOTA_MESSAGE;
use campaign_core::service::{GenerativeService, ServiceError};
use campaign_core::status::{ArtifactRef, GenerationStatus, ImageInput};
use campaign_pipeline::{CampaignPipeline, DEFAULT_IMAGE_PROMPT, DEFAULT_VIDEO_PROMPT};

// ---------------------------------------------------------------------------
// Scripted backend
// ---------------------------------------------------------------------------

/// Backend that pops pre-scripted results and records the prompts it
/// was called with.
#[derive(Default)]
struct ScriptedService {
    image_results: Mutex<VecDeque<Result<ArtifactRef, ServiceError>>>,
    video_results: Mutex<VecDeque<Result<ArtifactRef, ServiceError>>>,
    image_prompts: Mutex<Vec<String>>,
    video_prompts: Mutex<Vec<String>>,
}

impl ScriptedService {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn script_image(&self, result: Result<ArtifactRef, ServiceError>) {
        self.image_results.lock().unwrap().push_back(result);
    }

    fn script_video(&self, result: Result<ArtifactRef, ServiceError>) {
        self.video_results.lock().unwrap().push_back(result);
    }

    fn image_calls(&self) -> Vec<String> {
        self.image_prompts.lock().unwrap().clone()
    }

    fn video_calls(&self) -> Vec<String> {
        self.video_prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl GenerativeService for ScriptedService {
    async fn generate_image(
        &self,
        _customer: &ImageInput,
        _product: &ImageInput,
        prompt: &str,
    ) -> Result<ArtifactRef, ServiceError> {
        self.image_prompts.lock().unwrap().push(prompt.to_string());
        self.image_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted image call")
    }

    async fn generate_video(
        &self,
        _start_frame: &ArtifactRef,
        prompt: &str,
    ) -> Result<ArtifactRef, ServiceError> {
        self.video_prompts.lock().unwrap().push(prompt.to_string());
        self.video_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted video call")
    }
}

fn photo() -> ImageInput {
    ImageInput::new(vec![0xFF, 0xD8], "image/jpeg")
}

fn pipeline_with_inputs(service: &Arc<ScriptedService>) -> CampaignPipeline {
    let mut pipeline = CampaignPipeline::new(Arc::clone(service) as Arc<dyn GenerativeService>);
    pipeline.set_customer(photo());
    pipeline.set_product(photo());
    pipeline
}

/// Pipeline already holding a generated start frame.
async fn pipeline_with_frame(service: &Arc<ScriptedService>) -> CampaignPipeline {
    let mut pipeline = pipeline_with_inputs(service);
    service.script_image(Ok(ArtifactRef::new("data:image/png;base64,FRAME")));
    pipeline.generate_image().await;
    pipeline
}

// ---------------------------------------------------------------------------
// Image stage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn image_stage_requires_both_photos() {
    let service = ScriptedService::new();
    let mut pipeline = CampaignPipeline::new(Arc::clone(&service) as Arc<dyn GenerativeService>);
    pipeline.set_customer(photo());

    assert!(!pipeline.can_generate_image());
    pipeline.generate_image().await;

    assert!(service.image_calls().is_empty());
    assert_eq!(pipeline.image().status, GenerationStatus::Idle);
}

#[tokio::test]
async fn image_success_stores_artifact() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_inputs(&service);
    service.script_image(Ok(ArtifactRef::new("data:image/png;base64,AAAA")));

    pipeline.generate_image().await;

    assert_eq!(pipeline.image().status, GenerationStatus::Success);
    assert_eq!(
        pipeline.image().artifact.as_ref().map(ArtifactRef::as_str),
        Some("data:image/png;base64,AAAA")
    );
    assert_matches!(pipeline.error_message(), None);
}

#[tokio::test]
async fn image_run_uses_the_current_prompt() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_inputs(&service);
    assert_eq!(pipeline.image_prompt(), DEFAULT_IMAGE_PROMPT);

    pipeline.set_image_prompt("Moody studio shot");
    service.script_image(Ok(ArtifactRef::new("a")));
    pipeline.generate_image().await;

    assert_eq!(service.image_calls(), vec!["Moody studio shot"]);
}

#[tokio::test]
async fn image_success_invalidates_downstream_video() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_frame(&service).await;
    service.script_video(Ok(ArtifactRef::new("https://dl/v1.mp4")));
    pipeline.generate_video().await;
    assert_eq!(pipeline.video().status, GenerationStatus::Success);

    // Regenerating the frame orphans the video built from the old one.
    service.script_image(Ok(ArtifactRef::new("data:image/png;base64,NEW")));
    pipeline.generate_image().await;

    assert_eq!(pipeline.video().status, GenerationStatus::Idle);
    assert_matches!(pipeline.video().artifact, None);
}

#[tokio::test]
async fn image_failure_keeps_prior_frame_and_video() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_frame(&service).await;
    service.script_video(Ok(ArtifactRef::new("https://dl/v1.mp4")));
    pipeline.generate_video().await;

    service.script_image(Err(ServiceError::SafetyFiltered));
    pipeline.generate_image().await;

    assert_eq!(pipeline.image().status, GenerationStatus::Error);
    assert_eq!(
        pipeline.image().artifact.as_ref().map(ArtifactRef::as_str),
        Some("data:image/png;base64,FRAME")
    );
    // A failed re-run must not tear down the existing video.
    assert_eq!(pipeline.video().status, GenerationStatus::Success);
}

#[tokio::test]
async fn quota_failures_surface_the_billing_message() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_inputs(&service);
    service.script_image(Err(ServiceError::Api {
        status: 429,
        body: "RESOURCE_EXHAUSTED".to_string(),
    }));

    pipeline.generate_image().await;

    assert_eq!(pipeline.error_message(), Some(QUOTA_MESSAGE));
}

#[tokio::test]
async fn a_new_run_clears_the_previous_error() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_inputs(&service);
    service.script_image(Err(ServiceError::Request("connection reset".to_string())));
    pipeline.generate_image().await;
    assert_matches!(pipeline.error_message(), Some(_));

    service.script_image(Ok(ArtifactRef::new("a")));
    pipeline.generate_image().await;

    assert_matches!(pipeline.error_message(), None);
    assert_eq!(pipeline.image().status, GenerationStatus::Success);
}

// ---------------------------------------------------------------------------
// Video stage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn video_stage_requires_a_start_frame() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_inputs(&service);

    assert!(!pipeline.can_generate_video());
    pipeline.generate_video().await;

    assert!(service.video_calls().is_empty());
    assert_eq!(pipeline.video().status, GenerationStatus::Idle);
}

#[tokio::test]
async fn video_success_stores_artifact() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_frame(&service).await;
    assert_eq!(pipeline.video_prompt(), DEFAULT_VIDEO_PROMPT);

    service.script_video(Ok(ArtifactRef::new("https://dl/ad.mp4")));
    pipeline.generate_video().await;

    assert_eq!(pipeline.video().status, GenerationStatus::Success);
    assert_eq!(
        pipeline.video().artifact.as_ref().map(ArtifactRef::as_str),
        Some("https://dl/ad.mp4")
    );
    assert_eq!(service.video_calls(), vec![DEFAULT_VIDEO_PROMPT]);
}

#[tokio::test]
async fn video_failure_keeps_prior_cut_and_reports_error() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_frame(&service).await;
    service.script_video(Ok(ArtifactRef::new("https://dl/v1.mp4")));
    pipeline.generate_video().await;

    service.script_video(Err(ServiceError::MissingOutput));
    pipeline.generate_video().await;

    assert_eq!(pipeline.video().status, GenerationStatus::Error);
    assert_eq!(
        pipeline.video().artifact.as_ref().map(ArtifactRef::as_str),
        Some("https://dl/v1.mp4")
    );
    assert_eq!(pipeline.error_message(), Some("No video URI returned"));
}

#[tokio::test]
async fn video_failure_leaves_the_frame_untouched() {
    let service = ScriptedService::new();
    let mut pipeline = pipeline_with_frame(&service).await;

    service.script_video(Err(ServiceError::Api {
        status: 500,
        body: "internal".to_string(),
    }));
    pipeline.generate_video().await;

    assert_eq!(pipeline.image().status, GenerationStatus::Success);
    assert_matches!(pipeline.image().artifact, Some(_));
}
