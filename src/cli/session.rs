//! The interactive notebook loop.
//!
//! Raw-mode key events come in from `console::Term`, get translated by the
//! key map, and are applied to an engine [`Session`]; every key repaints the
//! spread in place. Cursor motion lives here in the shell: the engine only
//! knows flat offsets, so arrows walk a visual-row map built with the same
//! wrapping rule the renderer uses, and the result is committed back through
//! [`Session::move_cursor_to`].

use colored::Colorize;
use console::Term;
use daybook::api::{CmdResult, DaybookApi};
use daybook::clipboard::SystemClipboard;
use daybook::engine::{PageGeometry, Session};
use daybook::error::{DaybookError, Result};
use daybook::store::ContentStore;
use daybook::workflow::WorkflowTrigger;

use super::keys::{self, CursorMotion, SessionInput};
use super::print;
use super::screen;

enum Outcome {
    Closed { discarded: bool },
    Packed(CmdResult),
}

/// Opens the notebook and blocks until the writer leaves it.
pub(crate) fn run<S: ContentStore, W: WorkflowTrigger>(
    api: &mut DaybookApi<S, W>,
    geometry: PageGeometry,
) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        return Err(DaybookError::Api(
            "The notebook needs an interactive terminal. Use `daybook note <text>` to capture from a script".to_string(),
        ));
    }

    let mut session = Session::new(geometry);
    term.hide_cursor()?;
    let outcome = drive(&term, api, &mut session);
    term.show_cursor()?;

    match outcome? {
        Outcome::Closed { discarded } => {
            if discarded {
                println!("{}", "Page discarded.".dimmed());
            }
        }
        Outcome::Packed(result) => {
            print::print_messages(&result.messages);
            if let Some(report) = &result.report {
                println!();
                print::print_report(report);
            }
        }
    }
    Ok(())
}

fn drive<S: ContentStore, W: WorkflowTrigger>(
    term: &Term,
    api: &mut DaybookApi<S, W>,
    session: &mut Session,
) -> Result<Outcome> {
    let mut clipboard = SystemClipboard::new();
    let mut status = String::new();
    let mut confirm_discard = false;
    let mut painted = 0;

    loop {
        redraw(term, session, &status, &mut painted)?;
        status.clear();

        // read_key_raw: the plain read_key raises SIGINT on Ctrl-C, and the
        // notebook needs that chord as a key event (copy).
        let key = term.read_key_raw()?;
        let Some(input) = keys::map_key(key) else {
            continue;
        };
        if !matches!(input, SessionInput::Quit) {
            confirm_discard = false;
        }

        match input {
            SessionInput::Edit(command) => {
                // Clipboard trouble lands in the status line; the draft is
                // untouched and the loop keeps going.
                if let Err(e) = session.apply(command, &mut clipboard) {
                    status = e.to_string();
                }
            }
            SessionInput::Move(motion) => {
                let target = target_offset(
                    session.text(),
                    session.draft().cursor(),
                    motion,
                    session.geometry(),
                );
                session.move_cursor_to(target);
            }
            SessionInput::Save => {
                if session.draft().is_blank() {
                    status = "Nothing to save yet".to_string();
                } else {
                    match api.save_page(session.text()) {
                        Ok(result) => {
                            session.clear();
                            status = first_message(&result);
                        }
                        Err(e) => status = e.to_string(),
                    }
                }
            }
            SessionInput::Pack => {
                if session.draft().is_blank() {
                    status = "Nothing to pack yet".to_string();
                } else {
                    // The webhook call blocks for up to the configured
                    // timeout; say so before going quiet.
                    redraw(term, session, "Packing the page…", &mut painted)?;
                    match api.pack_page(session.text()) {
                        Ok(result) if result.pending => {
                            status = first_message(&result);
                        }
                        Ok(result) => {
                            session.clear();
                            term.clear_last_lines(painted)?;
                            return Ok(Outcome::Packed(result));
                        }
                        Err(e) => status = e.to_string(),
                    }
                }
            }
            SessionInput::Quit => {
                if session.draft().is_empty() || confirm_discard {
                    let discarded = !session.draft().is_empty();
                    term.clear_last_lines(painted)?;
                    return Ok(Outcome::Closed { discarded });
                }
                confirm_discard = true;
                status = "The page has ink on it; esc again to discard".to_string();
            }
        }
    }
}

fn redraw(term: &Term, session: &Session, status: &str, painted: &mut usize) -> Result<()> {
    if *painted > 0 {
        term.clear_last_lines(*painted)?;
    }
    let lines = screen::paint(session, status);
    for line in &lines {
        term.write_line(line)?;
    }
    *painted = lines.len();
    Ok(())
}

fn first_message(result: &CmdResult) -> String {
    result
        .messages
        .first()
        .map(|m| m.content.clone())
        .unwrap_or_default()
}

/// One visual row of the notebook: a run of the flat text that the renderer
/// puts on a single line. `end` is exclusive and includes the terminating
/// newline when there is one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisualRow {
    start: usize,
    end: usize,
    newline: bool,
}

impl VisualRow {
    fn visible_end(&self) -> usize {
        if self.newline {
            self.end - 1
        } else {
            self.end
        }
    }

    fn visible_len(&self) -> usize {
        self.visible_end() - self.start
    }
}

/// Splits the text into visual rows: a row ends at a newline, when it fills
/// the line width, or at a page edge. Offsets are flat character offsets, so
/// the rows cover the whole text contiguously; the final row is the open one
/// the caret extends, and it is empty when the text ends flush with a line
/// or page.
fn visual_rows(text: &str, geometry: PageGeometry) -> Vec<VisualRow> {
    let cpl = geometry.chars_per_line();
    let cap = geometry.page_capacity();
    let mut rows = Vec::new();
    let mut start = 0;
    let mut visible = 0;
    let mut len = 0;

    for (i, c) in text.chars().enumerate() {
        len = i + 1;
        let page_edge = i > 0 && i % cap == 0 && start < i;
        if c == '\n' {
            if page_edge {
                rows.push(VisualRow {
                    start,
                    end: i,
                    newline: false,
                });
                start = i;
            }
            rows.push(VisualRow {
                start,
                end: i + 1,
                newline: true,
            });
            start = i + 1;
            visible = 0;
            continue;
        }
        if page_edge || visible == cpl {
            rows.push(VisualRow {
                start,
                end: i,
                newline: false,
            });
            start = i;
            visible = 0;
        }
        visible += 1;
    }

    let last_full = start < len && (visible == cpl || len % cap == 0);
    rows.push(VisualRow {
        start,
        end: len,
        newline: false,
    });
    if last_full {
        rows.push(VisualRow {
            start: len,
            end: len,
            newline: false,
        });
    }
    rows
}

fn row_of(rows: &[VisualRow], cursor: usize) -> usize {
    rows.iter()
        .position(|row| cursor < row.end)
        .unwrap_or(rows.len() - 1)
}

fn clamp_into(row: &VisualRow, col: usize) -> usize {
    row.start + col.min(row.visible_len())
}

/// Where one cursor motion lands, as a flat offset the session can commit.
///
/// Up and down keep the column, clamped to the target row; past the first or
/// last row they snap to the ends of the text, the way a textarea caret does.
pub(crate) fn target_offset(
    text: &str,
    cursor: usize,
    motion: CursorMotion,
    geometry: PageGeometry,
) -> usize {
    let len = text.chars().count();
    match motion {
        CursorMotion::Left => return cursor.saturating_sub(1),
        CursorMotion::Right => return (cursor + 1).min(len),
        _ => {}
    }

    let rows = visual_rows(text, geometry);
    let r = row_of(&rows, cursor);
    let col = cursor - rows[r].start;
    match motion {
        CursorMotion::Up if r == 0 => 0,
        CursorMotion::Up => clamp_into(&rows[r - 1], col),
        CursorMotion::Down if r + 1 == rows.len() => len,
        CursorMotion::Down => clamp_into(&rows[r + 1], col),
        CursorMotion::LineStart => rows[r].start,
        _ => rows[r].visible_end(),
    }
}
