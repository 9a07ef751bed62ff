//! The editable draft: one flat string plus cursor and selection state.
//!
//! All offsets in this module are character offsets, not byte offsets. The
//! pagination layer slices the same text by character counts, so keeping the
//! draft in character space means a cursor position is valid in both worlds
//! without conversion. Byte offsets appear only at the edge, where the string
//! is actually spliced.

/// An ordered character range over the draft text.
///
/// `start <= end` always holds. A collapsed selection (`start == end`) is the
/// caret itself; the draft keeps it pinned to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// A collapsed selection at `at`.
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// A selection spanning `a` and `b`, given in either order.
    pub fn span(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Selected length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// The in-progress notebook entry.
///
/// Holds the text being written along with the cursor and selection. Editing
/// operations keep two invariants: the cursor and both selection ends stay
/// within `[0, len]`, and a collapsed selection always sits at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    text: String,
    len: usize,
    cursor: usize,
    selection: Selection,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl Draft {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            len: 0,
            cursor: 0,
            selection: Selection::caret(0),
        }
    }

    /// Creates a draft from existing text with the cursor at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            cursor: len,
            selection: Selection::caret(len),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the draft holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected characters as an owned string. Empty when collapsed.
    pub fn selected_text(&self) -> String {
        self.text
            .chars()
            .skip(self.selection.start)
            .take(self.selection.len())
            .collect()
    }

    /// Moves the cursor, collapsing any selection onto it.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.len);
        self.selection = Selection::caret(self.cursor);
    }

    /// Selects the range between `a` and `b` (either order, clamped).
    ///
    /// The cursor is left where it was: selecting text is not a cursor
    /// commit. A zero-width range collapses into a plain cursor move.
    pub fn select(&mut self, a: usize, b: usize) {
        let sel = Selection::span(a.min(self.len), b.min(self.len));
        if sel.is_collapsed() {
            self.set_cursor(sel.start());
        } else {
            self.selection = sel;
        }
    }

    pub fn select_all(&mut self) {
        self.select(0, self.len);
    }

    /// Replaces the current selection with `s` and puts the cursor after it.
    ///
    /// With a collapsed selection this is a plain insert at the cursor.
    pub fn splice(&mut self, s: &str) {
        let start = self.selection.start();
        let end = self.selection.end();
        self.replace_range(start, end, s);
        self.set_cursor(start + s.chars().count());
    }

    /// Removes the selection, or the character before a collapsed cursor.
    pub fn backspace(&mut self) {
        if self.selection.is_collapsed() {
            if self.cursor == 0 {
                return;
            }
            let at = self.cursor;
            self.replace_range(at - 1, at, "");
            self.set_cursor(at - 1);
        } else {
            self.splice("");
        }
    }

    /// Removes the selection, or the character after a collapsed cursor.
    pub fn delete(&mut self) {
        if self.selection.is_collapsed() {
            if self.cursor == self.len {
                return;
            }
            let at = self.cursor;
            self.replace_range(at, at + 1, "");
            self.set_cursor(at);
        } else {
            self.splice("");
        }
    }

    /// Drops all text and resets cursor and selection.
    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
        self.cursor = 0;
        self.selection = Selection::caret(0);
    }

    fn replace_range(&mut self, start: usize, end: usize, s: &str) {
        let from = byte_offset(&self.text, start);
        let to = byte_offset(&self.text, end);
        self.text.replace_range(from..to, s);
        self.len = self.len - (end - start) + s.chars().count();
    }
}

/// Byte position of the `chars`-th character, or the end of the string.
pub(crate) fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_cursor() {
        let mut draft = Draft::new();
        draft.splice("hello");
        draft.splice(" world");
        assert_eq!(draft.text(), "hello world");
        assert_eq!(draft.cursor(), 11);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut draft = Draft::from_text("hello world");
        draft.select(0, 5);
        draft.splice("bye");
        assert_eq!(draft.text(), "bye world");
        assert_eq!(draft.cursor(), 3);
        assert!(draft.selection().is_collapsed());
    }

    #[test]
    fn test_backspace_on_an_empty_draft_is_a_noop() {
        let mut draft = Draft::new();
        draft.backspace();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut draft = Draft::from_text("ab");
        draft.set_cursor(0);
        draft.backspace();
        assert_eq!(draft.text(), "ab");
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn test_backspace_removes_previous_char() {
        let mut draft = Draft::from_text("abc");
        draft.set_cursor(2);
        draft.backspace();
        assert_eq!(draft.text(), "ac");
        assert_eq!(draft.cursor(), 1);
    }

    #[test]
    fn test_backspace_removes_selection() {
        let mut draft = Draft::from_text("abcdef");
        draft.select(1, 4);
        draft.backspace();
        assert_eq!(draft.text(), "aef");
        assert_eq!(draft.cursor(), 1);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut draft = Draft::from_text("ab");
        draft.delete();
        assert_eq!(draft.text(), "ab");
        assert_eq!(draft.cursor(), 2);
    }

    #[test]
    fn test_delete_removes_next_char() {
        let mut draft = Draft::from_text("abc");
        draft.set_cursor(1);
        draft.delete();
        assert_eq!(draft.text(), "ac");
        assert_eq!(draft.cursor(), 1);
    }

    #[test]
    fn test_select_keeps_cursor() {
        let mut draft = Draft::from_text("abcdef");
        draft.set_cursor(6);
        draft.select(1, 3);
        assert_eq!(draft.cursor(), 6);
        assert_eq!(draft.selected_text(), "bc");
    }

    #[test]
    fn test_collapsed_select_moves_cursor() {
        let mut draft = Draft::from_text("abcdef");
        draft.select(3, 3);
        assert_eq!(draft.cursor(), 3);
        assert!(draft.selection().is_collapsed());
    }

    #[test]
    fn test_select_clamps_to_length() {
        let mut draft = Draft::from_text("abc");
        draft.select(99, 1);
        assert_eq!(draft.selection().start(), 1);
        assert_eq!(draft.selection().end(), 3);
    }

    #[test]
    fn test_select_all_then_type_replaces_everything() {
        let mut draft = Draft::from_text("old text");
        draft.select_all();
        draft.splice("x");
        assert_eq!(draft.text(), "x");
        assert_eq!(draft.cursor(), 1);
    }

    #[test]
    fn test_splice_multibyte() {
        let mut draft = Draft::from_text("héllo");
        draft.select(1, 2);
        draft.splice("e");
        assert_eq!(draft.text(), "hello");
        assert_eq!(draft.len(), 5);
    }

    #[test]
    fn test_is_blank() {
        assert!(Draft::from_text("  \n\t ").is_blank());
        assert!(!Draft::from_text(" a ").is_blank());
    }
}
