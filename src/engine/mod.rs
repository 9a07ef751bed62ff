//! The notebook engine.
//!
//! Everything in this module is pure state and arithmetic: a flat draft text
//! ([`buffer`]), its projection into fixed-size page spreads ([`paginate`],
//! [`position`]), the spread the reader has open ([`controller`]), and a
//! [`session`] that applies editing commands atomically across all of them.
//! No terminal, store or network code lives here, which is what keeps the
//! whole editing model testable with plain assertions.

pub mod buffer;
pub mod command;
pub mod controller;
pub mod geometry;
pub mod paginate;
pub mod position;
pub mod session;

pub use buffer::{Draft, Selection};
pub use command::EditCommand;
pub use controller::PageController;
pub use geometry::{PageGeometry, DEFAULT_CHARS_PER_LINE, DEFAULT_LINES_PER_PAGE};
pub use paginate::{spread_at, spreads, total_spreads, Spread};
pub use position::{locate, offset_of, selection_span, PageCoordinate, SelectionSpan, Side};
pub use session::Session;
