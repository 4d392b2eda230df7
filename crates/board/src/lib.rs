//! Spatial interaction engine for the campaign canvas.
//!
//! Translates abstract pointer events into layout mutations and derives
//! connector geometry from the result:
//!
//! - [`pointer`] — platform-agnostic pointer events and panel regions.
//! - [`store`] — the single source of truth for panel rectangles.
//! - [`gesture`] — the per-panel drag/resize state machine.
//! - [`canvas`] — event routing with pointer capture, plus the derived
//!   connector read surface.
//!
//! Everything is synchronous and single-threaded; the host event loop
//! owns a [`CanvasController`] and feeds it events.

pub mod canvas;
pub mod gesture;
pub mod pointer;
pub mod store;

pub use canvas::{CanvasController, ConnectorPath};
pub use gesture::{GestureState, PanelGesture, ResizeOrigin};
pub use pointer::{PanelRegion, PointerId, PointerInput};
pub use store::LayoutStore;
