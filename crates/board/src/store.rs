//! Single source of truth for panel rectangles.

use std::collections::HashMap;

use campaign_core::geometry::Rect;
use campaign_core::layout::initial_layout;
use campaign_core::panel::PanelId;

/// Holds the current rectangle for every panel.
///
/// Initialized once with the default layout and mutated only by the
/// gesture controller. Every [`PanelId`] is present from construction
/// and never removed; writes replace exactly one entry. The store
/// itself validates nothing — callers clamp before writing.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    rects: HashMap<PanelId, Rect>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self {
            rects: initial_layout(),
        }
    }

    /// Current rectangle for one panel.
    pub fn get(&self, panel: PanelId) -> Rect {
        // Every id is inserted at construction and never removed.
        self.rects[&panel]
    }

    /// Replace one panel's rectangle, leaving all others untouched.
    pub fn set(&mut self, panel: PanelId, rect: Rect) {
        self.rects.insert(panel, rect);
    }

    /// Read-only view of the whole layout.
    pub fn snapshot(&self) -> &HashMap<PanelId, Rect> {
        &self.rects
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_default_layout() {
        let store = LayoutStore::new();
        assert_eq!(store.get(PanelId::Customer), Rect::new(50.0, 50.0, 320.0, 320.0));
        assert_eq!(store.snapshot().len(), PanelId::ALL.len());
    }

    #[test]
    fn set_replaces_only_the_named_entry() {
        let mut store = LayoutStore::new();
        let before_product = store.get(PanelId::Product);

        store.set(PanelId::Customer, Rect::new(1.0, 2.0, 300.0, 300.0));

        assert_eq!(store.get(PanelId::Customer), Rect::new(1.0, 2.0, 300.0, 300.0));
        assert_eq!(store.get(PanelId::Product), before_product);
    }

    #[test]
    fn set_never_rejects_a_write() {
        // Validation is the gesture controller's job; the store accepts
        // whatever it is handed.
        let mut store = LayoutStore::new();
        store.set(PanelId::Prompt, Rect::new(-10.0, -10.0, 1.0, 1.0));
        assert_eq!(store.get(PanelId::Prompt), Rect::new(-10.0, -10.0, 1.0, 1.0));
    }
}
