//! Which spread of the notebook is open.

use super::geometry::PageGeometry;
use super::paginate::total_spreads;
use super::position::locate;

/// Tracks the visible spread and keeps it within the document.
///
/// The controller follows the cursor: whenever an edit commits a new cursor
/// offset, the spread holding that offset becomes the visible one, clamped to
/// the last spread that actually exists. Explicit page turns move the view
/// freely; the view then stays put until the next cursor commit pulls it back.
#[derive(Debug, Clone, Default)]
pub struct PageController {
    current: usize,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves the view to the cursor's spread, clamped to the document.
    ///
    /// A cursor sitting exactly on the end of a full spread maps to the next
    /// spread index, which does not exist yet; the clamp keeps the view on
    /// the last real spread until another character creates the new one.
    pub fn follow_cursor(&mut self, cursor: usize, text_len: usize, geometry: PageGeometry) {
        let target = locate(cursor, geometry).spread;
        self.current = target.min(total_spreads(text_len, geometry) - 1);
    }

    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn forward(&mut self, text_len: usize, geometry: PageGeometry) {
        self.current = (self.current + 1).min(total_spreads(text_len, geometry) - 1);
    }

    pub fn goto(&mut self, index: usize, text_len: usize, geometry: PageGeometry) {
        self.current = index.min(total_spreads(text_len, geometry) - 1);
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
