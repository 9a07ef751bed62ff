//! Mapping flat text offsets onto page coordinates.
//!
//! The draft knows only flat character offsets; the notebook view needs to
//! know which spread, which side of it, and where on that side. `locate` and
//! `offset_of` are exact inverses for any offset, so cursor state can live in
//! flat space and be projected on demand.

use super::buffer::Selection;
use super::geometry::PageGeometry;

/// Which page of an open spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A caret position expressed in page space.
///
/// `offset` counts characters from the top of the side's page and ranges over
/// `[0, page_capacity)`. An offset that lands exactly on a capacity boundary
/// belongs to the start of the following side, which is where the caret is
/// drawn once a page fills up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCoordinate {
    pub spread: usize,
    pub side: Side,
    pub offset: usize,
}

/// Projects a flat character offset into page space.
pub fn locate(offset: usize, geometry: PageGeometry) -> PageCoordinate {
    let spread = offset / geometry.spread_capacity();
    let within = offset % geometry.spread_capacity();
    if within < geometry.page_capacity() {
        PageCoordinate {
            spread,
            side: Side::Left,
            offset: within,
        }
    } else {
        PageCoordinate {
            spread,
            side: Side::Right,
            offset: within - geometry.page_capacity(),
        }
    }
}

/// Reconstructs the flat offset a coordinate came from.
///
/// Callers holding the text clamp the result to its length.
pub fn offset_of(coord: PageCoordinate, geometry: PageGeometry) -> usize {
    let side = match coord.side {
        Side::Left => 0,
        Side::Right => geometry.page_capacity(),
    };
    coord.spread * geometry.spread_capacity() + side + coord.offset
}

/// A selection projected onto a single page side.
///
/// `start` and `end` are side-local character offsets with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub spread: usize,
    pub side: Side,
    pub start: usize,
    pub end: usize,
}

/// Projects a selection into page space.
///
/// A selection is highlighted only on the side where it starts. When the end
/// falls on another side or spread, the span is clipped to the end of the
/// starting side; the underlying flat selection stays intact, only this view
/// is narrowed. Collapsed selections have no span.
pub fn selection_span(selection: Selection, geometry: PageGeometry) -> Option<SelectionSpan> {
    if selection.is_collapsed() {
        return None;
    }
    let a = locate(selection.start(), geometry);
    let b = locate(selection.end(), geometry);
    let end = if a.spread == b.spread && a.side == b.side {
        b.offset
    } else {
        geometry.page_capacity()
    };
    Some(SelectionSpan {
        spread: a.spread,
        side: a.side,
        start: a.offset,
        end,
    })
}
