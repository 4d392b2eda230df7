//! Panel rectangles and canvas geometry.
//!
//! All coordinates are absolute canvas pixels with the origin at the
//! top-left. Panels are axis-aligned and the canvas neither pans nor
//! zooms, so no transform stack is needed.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Size limits
// ---------------------------------------------------------------------------

/// Minimum panel width in pixels. Resize gestures clamp to this.
pub const MIN_PANEL_WIDTH: f64 = 250.0;

/// Minimum panel height in pixels. Resize gestures clamp to this.
pub const MIN_PANEL_HEIGHT: f64 = 200.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A panel's position and size in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Midpoint of the right edge. Connectors leave a panel here.
    pub fn right_center(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h / 2.0)
    }

    /// Midpoint of the left edge. Connectors enter a panel here.
    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.h / 2.0)
    }

    /// The same rectangle shifted by a delta.
    pub fn translated(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// The same position with a new size, clamped to the panel minimums.
    ///
    /// Position is untouched: resizing only moves the bottom-right corner.
    pub fn resized_clamped(&self, w: f64, h: f64) -> Rect {
        Rect::new(
            self.x,
            self.y,
            w.max(MIN_PANEL_WIDTH),
            h.max(MIN_PANEL_HEIGHT),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
