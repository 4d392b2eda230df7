//! Panel identifiers.
//!
//! The canvas has exactly six panel roles, fixed for the life of a
//! session. String keys appear at the edges (serialization, host
//! lookups); internally everything is the [`PanelId`] enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the six fixed panel roles on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelId {
    /// Customer photo input.
    Customer,
    /// Product image input.
    Product,
    /// Image-stage prompt and trigger.
    Prompt,
    /// Generated still that seeds the video stage.
    StartFrame,
    /// Video-stage prompt and trigger.
    VideoPrompt,
    /// Final generated video.
    VideoAd,
}

impl PanelId {
    /// Every panel role, in pipeline order.
    pub const ALL: [PanelId; 6] = [
        PanelId::Customer,
        PanelId::Product,
        PanelId::Prompt,
        PanelId::StartFrame,
        PanelId::VideoPrompt,
        PanelId::VideoAd,
    ];

    /// The stable string key for this panel.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PanelId::Customer => "customer",
            PanelId::Product => "product",
            PanelId::Prompt => "prompt",
            PanelId::StartFrame => "startFrame",
            PanelId::VideoPrompt => "videoPrompt",
            PanelId::VideoAd => "videoAd",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Unknown panel '{s}'. Must be one of: {}",
                    PanelId::ALL.map(|p| p.as_str()).join(", ")
                ))
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
