//! Data-URL helpers for image payloads.
//!
//! Generated stills travel through the pipeline as `data:` URLs so the
//! host can display them without another fetch; the video stage has to
//! take one apart again to re-submit the frame bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Fallback MIME type for generated frames whose data URL carries none.
pub const FALLBACK_FRAME_MIME: &str = "image/png";

/// Build a `data:` URL from raw bytes and a MIME type.
pub fn to_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// MIME type embedded in a data URL, or [`FALLBACK_FRAME_MIME`].
pub fn mime_from_data_url(url: &str) -> &str {
    url.strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|mime| !mime.is_empty())
        .unwrap_or(FALLBACK_FRAME_MIME)
}

/// Base64 payload of a data URL with the header stripped.
///
/// Inputs that are already bare base64 pass through unchanged.
pub fn strip_data_url_header(url: &str) -> &str {
    match url.split_once("base64,") {
        Some((_, data)) => data,
        None => url,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
