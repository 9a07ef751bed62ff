//! Translates terminal key events into session inputs.
//!
//! The notebook is driven entirely by the keyboard. Editing keys map onto
//! [`EditCommand`]s, cursor keys onto [`CursorMotion`]s, and a small set of
//! chords trigger shell actions (save, pack, quit) that the event loop
//! handles itself.

use console::Key;
use daybook::engine::EditCommand;

/// A cursor movement request, resolved against the draft by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorMotion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

/// What a key press asks the notebook to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionInput {
    Edit(EditCommand),
    Move(CursorMotion),
    Save,
    Pack,
    Quit,
}

/// Maps one key event to a session input, or `None` for keys the notebook
/// ignores.
///
/// The event loop reads keys in raw mode, so Ctrl-C arrives as a key event
/// rather than a signal and is free to mean "copy". On unix the console crate
/// reports Ctrl-A as [`Key::Home`] and Ctrl-E as [`Key::End`]; on Windows the
/// same chords arrive as raw control characters. Ctrl-T is the select-all
/// chord that reaches us unmangled on every platform.
pub(crate) fn map_key(key: Key) -> Option<SessionInput> {
    match key {
        Key::Char(c) => map_char(c),
        Key::CtrlC => Some(SessionInput::Edit(EditCommand::Copy)),
        Key::Enter => Some(SessionInput::Edit(EditCommand::Insert("\n".to_string()))),
        Key::Backspace => Some(SessionInput::Edit(EditCommand::Backspace)),
        Key::Del => Some(SessionInput::Edit(EditCommand::Delete)),
        Key::ArrowLeft => Some(SessionInput::Move(CursorMotion::Left)),
        Key::ArrowRight => Some(SessionInput::Move(CursorMotion::Right)),
        Key::ArrowUp => Some(SessionInput::Move(CursorMotion::Up)),
        Key::ArrowDown => Some(SessionInput::Move(CursorMotion::Down)),
        Key::Home => Some(SessionInput::Move(CursorMotion::LineStart)),
        Key::End => Some(SessionInput::Move(CursorMotion::LineEnd)),
        Key::PageUp => Some(SessionInput::Edit(EditCommand::PageBack)),
        Key::PageDown => Some(SessionInput::Edit(EditCommand::PageForward)),
        Key::Escape => Some(SessionInput::Quit),
        Key::Tab => None,
        // Key is non_exhaustive; anything else is not a notebook key.
        _ => None,
    }
}

fn map_char(c: char) -> Option<SessionInput> {
    match c {
        // Ctrl-A, delivered raw on Windows (unix turns it into Key::Home).
        '\u{01}' => Some(SessionInput::Edit(EditCommand::SelectAll)),
        // Ctrl-T
        '\u{14}' => Some(SessionInput::Edit(EditCommand::SelectAll)),
        // Ctrl-C, when the terminal delivers it as a character.
        '\u{03}' => Some(SessionInput::Edit(EditCommand::Copy)),
        // Ctrl-X
        '\u{18}' => Some(SessionInput::Edit(EditCommand::Cut)),
        // Ctrl-V
        '\u{16}' => Some(SessionInput::Edit(EditCommand::Paste)),
        // Ctrl-S
        '\u{13}' => Some(SessionInput::Save),
        // Ctrl-P
        '\u{10}' => Some(SessionInput::Pack),
        c if !c.is_control() => Some(SessionInput::Edit(EditCommand::typed(c))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_char_inserts() {
        assert_eq!(
            map_key(Key::Char('q')),
            Some(SessionInput::Edit(EditCommand::Insert("q".to_string())))
        );
    }

    #[test]
    fn test_enter_inserts_newline() {
        assert_eq!(
            map_key(Key::Enter),
            Some(SessionInput::Edit(EditCommand::Insert("\n".to_string())))
        );
    }

    #[test]
    fn test_save_and_pack_chords() {
        assert_eq!(map_key(Key::Char('\u{13}')), Some(SessionInput::Save));
        assert_eq!(map_key(Key::Char('\u{10}')), Some(SessionInput::Pack));
    }

    #[test]
    fn test_copy_works_as_key_and_as_raw_char() {
        assert_eq!(
            map_key(Key::CtrlC),
            Some(SessionInput::Edit(EditCommand::Copy))
        );
        assert_eq!(
            map_key(Key::Char('\u{03}')),
            Some(SessionInput::Edit(EditCommand::Copy))
        );
    }

    #[test]
    fn test_select_all_on_both_chords() {
        assert_eq!(
            map_key(Key::Char('\u{01}')),
            Some(SessionInput::Edit(EditCommand::SelectAll))
        );
        assert_eq!(
            map_key(Key::Char('\u{14}')),
            Some(SessionInput::Edit(EditCommand::SelectAll))
        );
    }

    #[test]
    fn test_cut_and_paste_chords() {
        assert_eq!(
            map_key(Key::Char('\u{18}')),
            Some(SessionInput::Edit(EditCommand::Cut))
        );
        assert_eq!(
            map_key(Key::Char('\u{16}')),
            Some(SessionInput::Edit(EditCommand::Paste))
        );
    }

    #[test]
    fn test_arrows_move_the_cursor() {
        assert_eq!(
            map_key(Key::ArrowLeft),
            Some(SessionInput::Move(CursorMotion::Left))
        );
        assert_eq!(
            map_key(Key::ArrowDown),
            Some(SessionInput::Move(CursorMotion::Down))
        );
    }

    #[test]
    fn test_home_and_end_jump_within_the_line() {
        assert_eq!(
            map_key(Key::Home),
            Some(SessionInput::Move(CursorMotion::LineStart))
        );
        assert_eq!(
            map_key(Key::End),
            Some(SessionInput::Move(CursorMotion::LineEnd))
        );
    }

    #[test]
    fn test_page_keys_turn_spreads() {
        assert_eq!(
            map_key(Key::PageUp),
            Some(SessionInput::Edit(EditCommand::PageBack))
        );
        assert_eq!(
            map_key(Key::PageDown),
            Some(SessionInput::Edit(EditCommand::PageForward))
        );
    }

    #[test]
    fn test_escape_quits() {
        assert_eq!(map_key(Key::Escape), Some(SessionInput::Quit));
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(map_key(Key::Tab), None);
        assert_eq!(map_key(Key::Char('\u{02}')), None);
    }
}
