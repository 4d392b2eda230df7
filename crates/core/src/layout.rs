//! Default canvas layout.
//!
//! Starting rectangles for the six panels, the fixed set of connectors
//! drawn between them, and the canvas surface dimensions.

use std::collections::HashMap;

use crate::geometry::Rect;
use crate::panel::PanelId;

/// Canvas surface width in pixels.
pub const CANVAS_WIDTH: f64 = 2500.0;

/// Canvas surface height in pixels.
pub const CANVAS_HEIGHT: f64 = 1500.0;

/// The fixed edges of the campaign graph, in `(source, target)` order.
///
/// Connectors always leave the source's right edge and enter the
/// target's left edge; the set never changes at runtime.
pub const CONNECTIONS: &[(PanelId, PanelId)] = &[
    (PanelId::Customer, PanelId::Prompt),
    (PanelId::Product, PanelId::Prompt),
    (PanelId::Prompt, PanelId::StartFrame),
    (PanelId::StartFrame, PanelId::VideoPrompt),
    (PanelId::VideoPrompt, PanelId::VideoAd),
];

/// Starting rectangle for every panel.
///
/// Every [`PanelId`] has exactly one entry; the layout store keeps that
/// invariant for the rest of the session.
pub fn initial_layout() -> HashMap<PanelId, Rect> {
    HashMap::from([
        (PanelId::Customer, Rect::new(50.0, 50.0, 320.0, 320.0)),
        (PanelId::Product, Rect::new(50.0, 450.0, 320.0, 370.0)),
        (PanelId::Prompt, Rect::new(450.0, 250.0, 384.0, 400.0)),
        (PanelId::StartFrame, Rect::new(920.0, 250.0, 320.0, 500.0)),
        (PanelId::VideoPrompt, Rect::new(1320.0, 250.0, 384.0, 350.0)),
        (PanelId::VideoAd, Rect::new(1800.0, 250.0, 400.0, 500.0)),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{MIN_PANEL_HEIGHT, MIN_PANEL_WIDTH};

    #[test]
    fn every_panel_has_a_starting_rect() {
        let layout = initial_layout();
        for panel in PanelId::ALL {
            assert!(layout.contains_key(&panel), "missing {panel}");
        }
        assert_eq!(layout.len(), PanelId::ALL.len());
    }

    #[test]
    fn starting_rects_respect_minimum_size() {
        for rect in initial_layout().values() {
            assert!(rect.w >= MIN_PANEL_WIDTH);
            assert!(rect.h >= MIN_PANEL_HEIGHT);
        }
    }

    #[test]
    fn customer_panel_starts_at_documented_position() {
        assert_eq!(
            initial_layout()[&PanelId::Customer],
            Rect::new(50.0, 50.0, 320.0, 320.0)
        );
    }

    #[test]
    fn connections_form_the_five_edge_pipeline() {
        assert_eq!(CONNECTIONS.len(), 5);
        // The prompt panel fans in from both inputs.
        let into_prompt = CONNECTIONS
            .iter()
            .filter(|(_, t)| *t == PanelId::Prompt)
            .count();
        assert_eq!(into_prompt, 2);
    }
}
