//! The editing command set.

/// One editing action, applied atomically by [`super::session::Session`].
///
/// Commands either mutate the draft, move the visible spread, or exchange
/// text with the clipboard. Clipboard commands are all-or-nothing: when the
/// clipboard fails, the draft is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Insert text at the cursor, replacing any selection.
    Insert(String),
    /// Remove the selection, or the character before the cursor.
    Backspace,
    /// Remove the selection, or the character after the cursor.
    Delete,
    /// Select the entire draft without moving the cursor.
    SelectAll,
    /// Copy the selection to the clipboard. No-op without a selection.
    Copy,
    /// Copy the selection to the clipboard, then remove it.
    Cut,
    /// Insert the clipboard contents at the cursor.
    Paste,
    /// Turn to the previous spread.
    PageBack,
    /// Turn to the next spread.
    PageForward,
    /// Jump straight to a spread by index.
    GotoSpread(usize),
}

impl EditCommand {
    /// Convenience constructor for a single typed character.
    pub fn typed(ch: char) -> Self {
        EditCommand::Insert(ch.to_string())
    }
}
