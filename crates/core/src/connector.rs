//! Derived connector geometry between panels.
//!
//! Connectors always run from the right-center of the source panel to
//! the left-center of the target. The curve is a cubic bezier whose
//! control points are offset horizontally, keeping the tangent
//! horizontal at both ends; a large vertical displacement produces the
//! familiar "S" shape. Everything here is stateless — the caller
//! recomputes from the current rectangles whenever either panel moves.

use serde::Serialize;

use crate::geometry::{Point, Rect};

/// Smallest horizontal control-point offset, so short connectors still
/// curve instead of collapsing into a straight line.
pub const MIN_CONTROL_OFFSET: f64 = 50.0;

/// Endpoint pair of one connector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Endpoints {
    pub start: Point,
    pub end: Point,
}

/// Compute the endpoint pair between two panel rectangles.
pub fn connect(source: &Rect, target: &Rect) -> Endpoints {
    Endpoints {
        start: source.right_center(),
        end: target.left_center(),
    }
}

/// A cubic bezier from `start` to `end` via two control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicCurve {
    pub start: Point,
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl CubicCurve {
    /// SVG path data (`M .. C ..`) for hosts that draw paths.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x, self.start.y, self.c1.x, self.c1.y, self.c2.x, self.c2.y, self.end.x,
            self.end.y,
        )
    }
}

/// Build the connector curve for an endpoint pair.
///
/// The control offset scales with half the horizontal distance and never
/// drops below [`MIN_CONTROL_OFFSET`].
pub fn curve(start: Point, end: Point) -> CubicCurve {
    let offset = ((end.x - start.x).abs() * 0.5).max(MIN_CONTROL_OFFSET);
    CubicCurve {
        start,
        c1: Point::new(start.x + offset, start.y),
        c2: Point::new(end.x - offset, end.y),
        end,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Endpoints --

    #[test]
    fn connect_uses_right_center_and_left_center() {
        let a = Rect::new(50.0, 50.0, 320.0, 320.0);
        let b = Rect::new(450.0, 250.0, 384.0, 400.0);
        let ends = connect(&a, &b);
        assert_eq!(ends.start, Point::new(a.x + a.w, a.y + a.h / 2.0));
        assert_eq!(ends.end, Point::new(b.x, b.y + b.h / 2.0));
    }

    // -- Curve control points --

    #[test]
    fn control_offset_is_half_horizontal_distance() {
        let c = curve(Point::new(0.0, 0.0), Point::new(400.0, 100.0));
        assert_eq!(c.c1, Point::new(200.0, 0.0));
        assert_eq!(c.c2, Point::new(200.0, 100.0));
    }

    #[test]
    fn control_offset_never_below_minimum() {
        let c = curve(Point::new(0.0, 0.0), Point::new(10.0, 300.0));
        assert_eq!(c.c1.x, MIN_CONTROL_OFFSET);
        assert_eq!(c.c2.x, 10.0 - MIN_CONTROL_OFFSET);
    }

    #[test]
    fn tangents_are_horizontal_at_both_ends() {
        // Control points share the y of their endpoint regardless of the
        // vertical displacement between the two panels.
        let c = curve(Point::new(0.0, -250.0), Point::new(600.0, 800.0));
        assert_eq!(c.c1.y, c.start.y);
        assert_eq!(c.c2.y, c.end.y);
    }

    #[test]
    fn offset_is_symmetric_for_reversed_direction() {
        let c = curve(Point::new(400.0, 0.0), Point::new(0.0, 0.0));
        assert_eq!(c.c1.x, 600.0);
        assert_eq!(c.c2.x, -200.0);
    }

    // -- SVG output --

    #[test]
    fn svg_path_format() {
        let c = curve(Point::new(0.0, 0.0), Point::new(400.0, 100.0));
        assert_eq!(c.to_svg_path(), "M 0 0 C 200 0, 200 100, 400 100");
    }
}
