//! Page dimensions and the capacities derived from them.

use serde::{Deserialize, Serialize};

/// Characters per line on a printed page.
pub const DEFAULT_CHARS_PER_LINE: usize = 23;
/// Text lines on a printed page.
pub const DEFAULT_LINES_PER_PAGE: usize = 15;

/// The fixed dimensions of a single notebook page.
///
/// All capacity math in the engine derives from these two numbers. They are
/// configurable, but never zero: a degenerate dimension would make every
/// division in the pagination layer meaningless, so construction clamps both
/// to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageGeometry {
    chars_per_line: usize,
    lines_per_page: usize,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            chars_per_line: DEFAULT_CHARS_PER_LINE,
            lines_per_page: DEFAULT_LINES_PER_PAGE,
        }
    }
}

impl PageGeometry {
    /// Creates a geometry, clamping both dimensions to at least 1.
    pub fn new(chars_per_line: usize, lines_per_page: usize) -> Self {
        Self {
            chars_per_line: chars_per_line.max(1),
            lines_per_page: lines_per_page.max(1),
        }
    }

    pub fn chars_per_line(&self) -> usize {
        self.chars_per_line
    }

    pub fn lines_per_page(&self) -> usize {
        self.lines_per_page
    }

    /// Characters that fit on one page.
    pub fn page_capacity(&self) -> usize {
        self.chars_per_line * self.lines_per_page
    }

    /// Characters that fit on an open spread (left page + right page).
    pub fn spread_capacity(&self) -> usize {
        self.page_capacity() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacities() {
        let g = PageGeometry::default();
        assert_eq!(g.page_capacity(), 345);
        assert_eq!(g.spread_capacity(), 690);
    }

    #[test]
    fn test_new_clamps_zero_dimensions() {
        let g = PageGeometry::new(0, 0);
        assert_eq!(g.chars_per_line(), 1);
        assert_eq!(g.lines_per_page(), 1);
        assert_eq!(g.page_capacity(), 1);
    }

    #[test]
    fn test_custom_dimensions() {
        let g = PageGeometry::new(5, 2);
        assert_eq!(g.page_capacity(), 10);
        assert_eq!(g.spread_capacity(), 20);
    }
}
