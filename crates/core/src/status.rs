//! Generation stage status and artifact types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback MIME type applied when an input file carries none.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Lifecycle status of one generation stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationStatus {
    /// Nothing requested yet (or invalidated by an upstream re-run).
    #[default]
    Idle,
    /// A request is in flight. The trigger must stay disabled.
    Loading,
    /// The stage produced an artifact.
    Success,
    /// The last attempt failed; see the shared error message.
    Error,
}

/// Opaque reference to produced media (a data URL or remote URI).
///
/// Created when a stage succeeds, cleared when the upstream stage
/// re-runs, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef(String);

impl ArtifactRef {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ArtifactRef {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolved input image from one of the pickers: raw bytes plus the
/// MIME type to send alongside them.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ImageInput {
    pub fn new(bytes: Vec<u8>, mime: impl Into<String>) -> Self {
        Self {
            bytes,
            mime: mime.into(),
        }
    }

    /// Build an input, substituting [`DEFAULT_IMAGE_MIME`] when the
    /// source file reported no usable type.
    pub fn with_fallback_mime(bytes: Vec<u8>, mime: Option<&str>) -> Self {
        let mime = match mime {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_IMAGE_MIME,
        };
        Self::new(bytes, mime)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
