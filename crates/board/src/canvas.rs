//! Canvas-level event routing and pointer capture.
//!
//! [`CanvasController`] owns the layout store and one gesture machine
//! per panel. Starting a gesture captures the pointer: every later
//! move, up, or cancel for that pointer id is delivered to the
//! capturing panel no matter where the cursor is, so a fast drag that
//! leaves the panel cannot orphan the gesture. Moves from uncaptured
//! pointers are hover traffic and are dropped.

use std::collections::HashMap;

use campaign_core::connector::{connect, curve, CubicCurve};
use campaign_core::geometry::Rect;
use campaign_core::layout::CONNECTIONS;
use campaign_core::panel::PanelId;

use crate::gesture::PanelGesture;
use crate::pointer::{PanelRegion, PointerId, PointerInput};
use crate::store::LayoutStore;

/// One derived connector curve between two panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPath {
    pub source: PanelId,
    pub target: PanelId,
    pub curve: CubicCurve,
}

/// Routes pointer events to per-panel gesture machines and exposes the
/// layout and connector read surfaces.
pub struct CanvasController {
    store: LayoutStore,
    gestures: HashMap<PanelId, PanelGesture>,
    /// Active captures. Each entry routes every event from that pointer
    /// to its panel until the gesture releases it.
    captures: HashMap<PointerId, PanelId>,
}

impl CanvasController {
    pub fn new() -> Self {
        let gestures = PanelId::ALL
            .into_iter()
            .map(|panel| (panel, PanelGesture::new(panel)))
            .collect();
        Self {
            store: LayoutStore::new(),
            gestures,
            captures: HashMap::new(),
        }
    }

    // ---- read surfaces ----

    /// Current rectangle for one panel.
    pub fn rect(&self, panel: PanelId) -> Rect {
        self.store.get(panel)
    }

    /// The layout store, read-only.
    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// Derive the connector curves for the fixed panel graph from the
    /// current layout. Recomputed from scratch on every call; nothing
    /// is cached, so the result can never go stale.
    pub fn connectors(&self) -> Vec<ConnectorPath> {
        CONNECTIONS
            .iter()
            .map(|&(source, target)| {
                let ends = connect(&self.store.get(source), &self.store.get(target));
                ConnectorPath {
                    source,
                    target,
                    curve: curve(ends.start, ends.end),
                }
            })
            .collect()
    }

    // ---- pointer events ----

    /// Pointer-down on a panel region, as hit-tested by the host.
    pub fn pointer_down(&mut self, panel: PanelId, region: PanelRegion, input: PointerInput) {
        if self.captures.contains_key(&input.pointer) {
            // This pointer is already driving a gesture elsewhere.
            return;
        }
        let Some(gesture) = self.gestures.get_mut(&panel) else {
            return;
        };
        if gesture.pointer_down(region, input, &self.store) {
            self.captures.insert(input.pointer, panel);
            tracing::trace!(panel = %panel, pointer = input.pointer.0, "Pointer captured");
        }
    }

    /// Pointer-move, delivered to the capturing panel if any.
    pub fn pointer_move(&mut self, input: PointerInput) {
        let Some(&panel) = self.captures.get(&input.pointer) else {
            return;
        };
        if let Some(gesture) = self.gestures.get_mut(&panel) {
            gesture.pointer_move(input, &mut self.store);
        }
    }

    /// Pointer-up. Ends the gesture and releases the capture held by
    /// this pointer.
    pub fn pointer_up(&mut self, input: PointerInput) {
        let Some(&panel) = self.captures.get(&input.pointer) else {
            return;
        };
        if let Some(gesture) = self.gestures.get_mut(&panel) {
            if gesture.pointer_up(input) {
                self.captures.remove(&input.pointer);
                tracing::trace!(panel = %panel, pointer = input.pointer.0, "Pointer released");
            }
        }
    }

    /// Pointer-cancel follows the same release path as pointer-up.
    pub fn pointer_cancel(&mut self, input: PointerInput) {
        self.pointer_up(input);
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
