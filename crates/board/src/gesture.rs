//! Per-panel gesture state machine.
//!
//! One [`PanelGesture`] per panel translates pointer events into
//! rectangle updates. Drag and resize are mutually exclusive for a
//! panel: while a resize is active, header pointer-downs are refused
//! until the gesture ends.
//!
//! Drags apply incremental per-event deltas to the position. Resizes
//! compute deltas from the recorded gesture origin instead, so
//! coalesced or dropped move events cannot make the size drift: the
//! final size depends only on the latest pointer position.

use campaign_core::panel::PanelId;

use crate::pointer::{PanelRegion, PointerId, PointerInput};
use crate::store::LayoutStore;

/// Recorded starting conditions of a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOrigin {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub start_w: f64,
    pub start_h: f64,
}

/// Current gesture of one panel. Exactly one variant is active at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    /// Header drag in progress; position updates use per-event deltas.
    Dragging {
        pointer: PointerId,
        last_x: f64,
        last_y: f64,
    },
    /// Corner resize in progress; size updates use origin deltas.
    Resizing {
        pointer: PointerId,
        origin: ResizeOrigin,
    },
}

/// Gesture controller for a single panel.
#[derive(Debug)]
pub struct PanelGesture {
    panel: PanelId,
    state: GestureState,
}

impl PanelGesture {
    pub fn new(panel: PanelId) -> Self {
        Self {
            panel,
            state: GestureState::Idle,
        }
    }

    pub fn panel(&self) -> PanelId {
        self.panel
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.state, GestureState::Resizing { .. })
    }

    /// Handle a pointer-down on the given region.
    ///
    /// Returns `true` when a gesture started and the caller should
    /// capture the pointer for this panel. Body presses and presses
    /// during an active gesture start nothing.
    pub fn pointer_down(
        &mut self,
        region: PanelRegion,
        input: PointerInput,
        store: &LayoutStore,
    ) -> bool {
        if self.state != GestureState::Idle {
            return false;
        }
        match region {
            PanelRegion::ResizeHandle => {
                let rect = store.get(self.panel);
                self.state = GestureState::Resizing {
                    pointer: input.pointer,
                    origin: ResizeOrigin {
                        pointer_x: input.x,
                        pointer_y: input.y,
                        start_w: rect.w,
                        start_h: rect.h,
                    },
                };
                tracing::debug!(panel = %self.panel, "Resize gesture started");
                true
            }
            PanelRegion::Header => {
                self.state = GestureState::Dragging {
                    pointer: input.pointer,
                    last_x: input.x,
                    last_y: input.y,
                };
                tracing::debug!(panel = %self.panel, "Drag gesture started");
                true
            }
            PanelRegion::Body => false,
        }
    }

    /// Handle a pointer-move routed to this panel, writing the updated
    /// rectangle to the store.
    ///
    /// Moves from any pointer other than the one driving the gesture
    /// are ignored.
    pub fn pointer_move(&mut self, input: PointerInput, store: &mut LayoutStore) {
        match self.state {
            GestureState::Resizing { pointer, origin } if pointer == input.pointer => {
                let dx = input.x - origin.pointer_x;
                let dy = input.y - origin.pointer_y;
                let rect = store
                    .get(self.panel)
                    .resized_clamped(origin.start_w + dx, origin.start_h + dy);
                store.set(self.panel, rect);
            }
            GestureState::Dragging {
                pointer,
                last_x,
                last_y,
            } if pointer == input.pointer => {
                let rect = store
                    .get(self.panel)
                    .translated(input.x - last_x, input.y - last_y);
                store.set(self.panel, rect);
                self.state = GestureState::Dragging {
                    pointer,
                    last_x: input.x,
                    last_y: input.y,
                };
            }
            _ => {}
        }
    }

    /// Handle pointer-up or pointer-cancel.
    ///
    /// Ends the gesture when the releasing pointer is the one that
    /// started it; returns `true` when the capture should be released.
    pub fn pointer_up(&mut self, input: PointerInput) -> bool {
        match self.state {
            GestureState::Resizing { pointer, .. } | GestureState::Dragging { pointer, .. }
                if pointer == input.pointer =>
            {
                self.state = GestureState::Idle;
                tracing::debug!(panel = %self.panel, "Gesture ended");
                true
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
