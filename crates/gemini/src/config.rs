//! Environment-driven configuration for the Gemini client.

use std::time::Duration;

/// Default base URL for the Generative Language API.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for composing campaign stills.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Default model for animating start frames.
pub const DEFAULT_VIDEO_MODEL: &str = "veo-3.1-fast-generate-preview";

/// Delay between status checks of a long-running video job.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Connection settings for one Gemini API project.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base HTTP URL (no trailing slash).
    pub api_url: String,
    pub api_key: String,
    pub image_model: String,
    pub video_model: String,
    pub poll_interval: Duration,
}

/// Errors raised while assembling a config from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY must be set")]
    MissingApiKey,
}

impl GeminiConfig {
    /// Config with an explicit key and the model/URL defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Build a config from the environment (`.env` files are honoured).
    ///
    /// `GEMINI_API_KEY` is required. `GEMINI_API_URL`,
    /// `GEMINI_IMAGE_MODEL`, and `GEMINI_VIDEO_MODEL` override the
    /// defaults when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);

        if let Ok(url) = std::env::var("GEMINI_API_URL") {
            config.api_url = url;
        }
        if let Ok(model) = std::env::var("GEMINI_IMAGE_MODEL") {
            config.image_model = model;
        }
        if let Ok(model) = std::env::var("GEMINI_VIDEO_MODEL") {
            config.video_model = model;
        }
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
