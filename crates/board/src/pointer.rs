//! Abstract pointer input.
//!
//! The engine does not talk to a windowing system. The host hit-tests
//! its own widgets and feeds the controller pointer events in canvas
//! coordinates; capture semantics are handled inside the engine.

/// Identifies one pointing device (or touch contact) for the duration
/// of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// One pointer sample in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub pointer: PointerId,
    pub x: f64,
    pub y: f64,
}

impl PointerInput {
    pub const fn new(pointer: PointerId, x: f64, y: f64) -> Self {
        Self { pointer, x, y }
    }
}

/// Region of a panel a pointer-down landed on, as hit-tested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRegion {
    /// Title bar. Starts a drag.
    Header,
    /// Content area. Starts nothing.
    Body,
    /// Bottom-right corner handle. Starts a resize.
    ResizeHandle,
}
