//! REST client for the Gemini image and Veo video endpoints.
//!
//! Image composition is a single `POST {model}:generateContent`
//! request/response. Video generation is long-running:
//! `POST {model}:predictLongRunning` returns an operation handle that
//! is polled until `done`, then the video URI is pulled out of the
//! operation response. Request bodies and response navigation live in
//! free functions so they can be unit-tested without a server.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use campaign_core::service::{GenerativeService, ServiceError};
use campaign_core::status::{ArtifactRef, ImageInput};

use crate::config::GeminiConfig;
use crate::media::{mime_from_data_url, strip_data_url_header};

/// Instruction prefixed to the user's prompt for the image stage.
pub const COMPOSE_INSTRUCTION: &str =
    "Create a high-end photorealistic image combining these two images. ";

/// HTTP client for one Gemini API project.
pub struct GeminiApi {
    client: reqwest::Client,
    config: GeminiConfig,
}

/// A long-running operation handle, as returned by both the submit call
/// and every poll.
#[derive(Debug, Deserialize)]
pub struct Operation {
    /// Server-assigned name, e.g. `models/veo-x/operations/abc123`.
    pub name: String,
    #[serde(default)]
    pub done: bool,
    /// Result payload, present once `done` is true and the job succeeded.
    #[serde(default)]
    pub response: Option<serde_json::Value>,
    /// Error payload, present once `done` is true and the job failed.
    #[serde(default)]
    pub error: Option<OperationError>,
}

/// Error payload of a failed long-running operation.
#[derive(Debug, Deserialize)]
pub struct OperationError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

impl GeminiApi {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling across
    /// services).
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    // ---- private helpers ----

    async fn post_json(
        &self,
        url: String,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ServiceError> {
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// Fetch the current state of a long-running operation.
    async fn poll_operation(&self, name: &str) -> Result<Operation, ServiceError> {
        let response = self
            .client
            .get(format!("{}/{}", self.config.api_url, name))
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        let value = Self::parse_response(response).await?;
        serde_json::from_value(value).map_err(|e| ServiceError::Request(e.to_string()))
    }

    /// Ensure the response has a success status code, or convert it into
    /// a [`ServiceError::Api`] carrying the status and body text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful response body as JSON.
    async fn parse_response(response: reqwest::Response) -> Result<serde_json::Value, ServiceError> {
        let response = Self::ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))
    }
}

#[async_trait::async_trait]
impl GenerativeService for GeminiApi {
    async fn generate_image(
        &self,
        customer: &ImageInput,
        product: &ImageInput,
        prompt: &str,
    ) -> Result<ArtifactRef, ServiceError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_url, self.config.image_model
        );
        let body = image_request_body(customer, product, prompt);

        tracing::info!(model = %self.config.image_model, "Submitting image generation");
        let response = self.post_json(url, &body).await?;

        // A response without inline image data means the model declined
        // to produce one; that is a failure, not an empty success.
        let (mime, data) = extract_inline_image(&response).ok_or(ServiceError::SafetyFiltered)?;

        tracing::info!(model = %self.config.image_model, mime = %mime, "Campaign image generated");
        Ok(ArtifactRef::new(format!("data:{mime};base64,{data}")))
    }

    async fn generate_video(
        &self,
        start_frame: &ArtifactRef,
        prompt: &str,
    ) -> Result<ArtifactRef, ServiceError> {
        let frame_mime = mime_from_data_url(start_frame.as_str());
        let frame_data = strip_data_url_header(start_frame.as_str());

        let url = format!(
            "{}/models/{}:predictLongRunning",
            self.config.api_url, self.config.video_model
        );
        let body = video_request_body(frame_data, frame_mime, prompt);

        let submitted = self.post_json(url, &body).await?;
        let mut operation: Operation = serde_json::from_value(submitted)
            .map_err(|e| ServiceError::Request(e.to_string()))?;
        tracing::info!(operation = %operation.name, "Video job submitted");

        // Poll until the job resolves. There is no cancellation path;
        // a job in flight always runs to a terminal state.
        while !operation.done {
            tokio::time::sleep(self.config.poll_interval).await;
            operation = self.poll_operation(&operation.name).await?;
            tracing::debug!(operation = %operation.name, done = operation.done, "Polled video job");
        }

        if let Some(error) = operation.error {
            tracing::warn!(
                operation = %operation.name,
                code = error.code,
                "Video job failed"
            );
            return Err(ServiceError::Api {
                status: error.code,
                body: error.message,
            });
        }

        let uri = operation
            .response
            .as_ref()
            .and_then(extract_video_uri)
            .ok_or(ServiceError::MissingOutput)?;

        tracing::info!(operation = %operation.name, "Video job completed");
        Ok(ArtifactRef::new(uri))
    }
}

// ---------------------------------------------------------------------------
// Request builders and response extractors
// ---------------------------------------------------------------------------

/// `generateContent` body combining the two input photos and the prompt.
pub fn image_request_body(
    customer: &ImageInput,
    product: &ImageInput,
    prompt: &str,
) -> serde_json::Value {
    serde_json::json!({
        "contents": {
            "parts": [
                {
                    "inlineData": {
                        "mimeType": customer.mime,
                        "data": STANDARD.encode(&customer.bytes),
                    }
                },
                {
                    "inlineData": {
                        "mimeType": product.mime,
                        "data": STANDARD.encode(&product.bytes),
                    }
                },
                { "text": format!("{COMPOSE_INSTRUCTION}{prompt}") },
            ]
        }
    })
}

/// First inline image in a `generateContent` response, as
/// `(mime_type, base64_data)`. Text-only responses yield `None`.
pub fn extract_inline_image(response: &serde_json::Value) -> Option<(String, String)> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    for part in parts {
        if let Some(inline) = part.get("inlineData") {
            if let Some(data) = inline.get("data").and_then(|d| d.as_str()) {
                let mime = inline
                    .get("mimeType")
                    .and_then(|m| m.as_str())
                    .unwrap_or("image/png");
                return Some((mime.to_string(), data.to_string()));
            }
        }
    }
    None
}

/// `predictLongRunning` body animating a start frame.
pub fn video_request_body(
    frame_base64: &str,
    frame_mime: &str,
    prompt: &str,
) -> serde_json::Value {
    serde_json::json!({
        "instances": [{
            "prompt": prompt,
            "image": {
                "bytesBase64Encoded": frame_base64,
                "mimeType": frame_mime,
            }
        }],
        "parameters": {
            "sampleCount": 1,
            "resolution": "720p",
            "aspectRatio": "16:9",
        }
    })
}

/// Video URI inside a completed operation response.
///
/// The REST surface nests it under `generateVideoResponse.generatedSamples`;
/// older responses use a top-level `generatedVideos` list. Both are
/// accepted.
pub fn extract_video_uri(response: &serde_json::Value) -> Option<String> {
    let sample = response
        .get("generateVideoResponse")
        .and_then(|r| r.get("generatedSamples"))
        .or_else(|| response.get("generatedVideos"))?
        .get(0)?;

    sample
        .get("video")?
        .get("uri")?
        .as_str()
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
