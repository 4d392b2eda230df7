use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campaign_core::status::{GenerationStatus, ImageInput};
use campaign_gemini::{GeminiApi, GeminiConfig};
use campaign_pipeline::CampaignPipeline;

/// MIME type guessed from a file extension, for the upload fallback.
fn mime_for_path(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

fn read_photo(path: &str) -> ImageInput {
    let path = Path::new(path);
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    ImageInput::with_fallback_mime(bytes, mime_for_path(path))
}

#[tokio::main]
async fn main() {
    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_pipeline=info,campaign_gemini=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Arguments ---
    let mut args = std::env::args().skip(1);
    let (customer_path, product_path) = match (args.next(), args.next()) {
        (Some(c), Some(p)) => (c, p),
        _ => {
            eprintln!("Usage: campaign-pipeline <customer-photo> <product-photo> [image-prompt] [video-prompt]");
            std::process::exit(2);
        }
    };

    // --- Configuration ---
    let config = GeminiConfig::from_env().expect("GEMINI_API_KEY must be set");
    tracing::info!(
        image_model = %config.image_model,
        video_model = %config.video_model,
        "Loaded Gemini configuration"
    );

    // --- Pipeline ---
    let service = Arc::new(GeminiApi::new(config));
    let mut pipeline = CampaignPipeline::new(service);
    pipeline.set_customer(read_photo(&customer_path));
    pipeline.set_product(read_photo(&product_path));
    if let Some(prompt) = args.next() {
        pipeline.set_image_prompt(prompt);
    }
    if let Some(prompt) = args.next() {
        pipeline.set_video_prompt(prompt);
    }

    // --- Stage 1: start frame ---
    pipeline.generate_image().await;
    if pipeline.image().status != GenerationStatus::Success {
        eprintln!(
            "Image generation failed: {}",
            pipeline.error_message().unwrap_or("unknown error")
        );
        std::process::exit(1);
    }

    // --- Stage 2: video ad ---
    pipeline.generate_video().await;
    match pipeline.video().artifact {
        Some(ref video) if pipeline.video().status == GenerationStatus::Success => {
            println!("{video}");
        }
        _ => {
            eprintln!(
                "Video generation failed: {}",
                pipeline.error_message().unwrap_or("unknown error")
            );
            std::process::exit(1);
        }
    }
}
