//! The editing session: draft, visible spread, and the command reducer.

use crate::clipboard::Clipboard;
use crate::error::Result;

use super::buffer::Draft;
use super::command::EditCommand;
use super::controller::PageController;
use super::geometry::PageGeometry;
use super::paginate::{spread_at, total_spreads, Spread};
use super::position::{locate, selection_span, PageCoordinate, SelectionSpan};

/// One editing session over a single draft.
///
/// The session owns the draft and the page controller and funnels every
/// mutation through [`Session::apply`], so the cursor, selection and visible
/// spread can never drift apart. Commands are atomic: a failing clipboard
/// leaves the whole session exactly as it was.
#[derive(Debug, Clone)]
pub struct Session {
    draft: Draft,
    controller: PageController,
    geometry: PageGeometry,
}

impl Session {
    /// An empty session opened on the first spread.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            draft: Draft::new(),
            controller: PageController::new(),
            geometry,
        }
    }

    /// A session over existing text, cursor at the end, viewing its spread.
    pub fn with_text(text: impl Into<String>, geometry: PageGeometry) -> Self {
        let mut session = Self {
            draft: Draft::from_text(text),
            controller: PageController::new(),
            geometry,
        };
        session.follow_cursor();
        session
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn text(&self) -> &str {
        self.draft.text()
    }

    pub fn current_spread_index(&self) -> usize {
        self.controller.current()
    }

    pub fn total_spreads(&self) -> usize {
        total_spreads(self.draft.len(), self.geometry)
    }

    /// The spread currently open in the view.
    pub fn spread(&self) -> Spread {
        spread_at(self.draft.text(), self.controller.current(), self.geometry)
    }

    /// Where the caret sits in page space.
    pub fn cursor_coordinate(&self) -> PageCoordinate {
        locate(self.draft.cursor(), self.geometry)
    }

    /// The selection highlight, clipped to its starting side.
    pub fn selection_span(&self) -> Option<SelectionSpan> {
        selection_span(self.draft.selection(), self.geometry)
    }

    /// Applies one editing command.
    ///
    /// Commands that commit a new cursor offset pull the view to the spread
    /// holding it; selecting and explicit page turns leave the cursor alone.
    pub fn apply<C: Clipboard>(&mut self, command: EditCommand, clipboard: &mut C) -> Result<()> {
        match command {
            EditCommand::Insert(text) => {
                self.draft.splice(&text);
                self.follow_cursor();
            }
            EditCommand::Backspace => {
                self.draft.backspace();
                self.follow_cursor();
            }
            EditCommand::Delete => {
                self.draft.delete();
                self.follow_cursor();
            }
            EditCommand::SelectAll => {
                self.draft.select_all();
            }
            EditCommand::Copy => {
                if !self.draft.selection().is_collapsed() {
                    clipboard.write_text(&self.draft.selected_text())?;
                }
            }
            EditCommand::Cut => {
                if !self.draft.selection().is_collapsed() {
                    // The clipboard write comes first: if it fails, nothing
                    // has been deleted yet.
                    clipboard.write_text(&self.draft.selected_text())?;
                    self.draft.splice("");
                    self.follow_cursor();
                }
            }
            EditCommand::Paste => {
                let text = clipboard.read_text()?;
                if !text.is_empty() {
                    self.draft.splice(&text);
                    self.follow_cursor();
                }
            }
            EditCommand::PageBack => {
                self.controller.back();
            }
            EditCommand::PageForward => {
                self.controller.forward(self.draft.len(), self.geometry);
            }
            EditCommand::GotoSpread(index) => {
                self.controller.goto(index, self.draft.len(), self.geometry);
            }
        }
        Ok(())
    }

    /// Commits a new cursor offset, collapsing the selection onto it.
    pub fn move_cursor_to(&mut self, offset: usize) {
        self.draft.set_cursor(offset);
        self.follow_cursor();
    }

    /// Selects a range without moving the cursor. A zero-width range is a
    /// plain cursor commit instead.
    pub fn select_range(&mut self, a: usize, b: usize) {
        self.draft.select(a, b);
        if self.draft.selection().is_collapsed() {
            self.follow_cursor();
        }
    }

    /// Drops the draft and turns back to the first spread.
    pub fn clear(&mut self) {
        self.draft.clear();
        self.controller.reset();
    }

    fn follow_cursor(&mut self) {
        self.controller
            .follow_cursor(self.draft.cursor(), self.draft.len(), self.geometry);
    }
}
