//! Spread layout and frame drawing.
//!
//! The engine hands us flat text plus page-space coordinates; this module
//! turns the open spread into a character grid and draws it as two pages
//! inside one box, with a dot strip underneath marking which spread is open:
//!
//! ```text
//! ╭─────────┬─────────╮
//! │ dear di │ ary tod │
//! │ ay i    │         │
//! ╰─────────┴─────────╯
//!        ● ○ ○
//! ```
//!
//! [`layout`] does the arithmetic and carries no styling; [`frame`] renders it
//! as plain strings (what the tests assert against) and [`paint`] as styled
//! lines for the terminal.

use console::Style;
use daybook::engine::{PageGeometry, Session, Side};
use once_cell::sync::Lazy;

pub(crate) const HELP_LINE: &str = "^S save   ^P pack   ^T select all   esc quit";

/// How one cell should be inked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellKind {
    Plain,
    Selected,
    Caret,
}

/// The open spread resolved into drawable cells, one grid per page side.
///
/// Rows may be shorter than the line width; the renderers pad them. A grid
/// never has more rows than the page, even when newlines push text past the
/// bottom edge—overflowing characters are simply not drawn.
pub(crate) struct SpreadLayout {
    pub left: Vec<Vec<(char, CellKind)>>,
    pub right: Vec<Vec<(char, CellKind)>>,
    pub current: usize,
    pub total: usize,
}

struct NotebookStyles {
    frame: Style,
    selected: Style,
    caret: Style,
    dot_active: Style,
    dot_idle: Style,
    status: Style,
}

static STYLES: Lazy<NotebookStyles> = Lazy::new(|| NotebookStyles {
    frame: Style::new().dim(),
    selected: Style::new().on_blue().white(),
    caret: Style::new().reverse(),
    dot_active: Style::new().bold(),
    dot_idle: Style::new().dim(),
    status: Style::new().dim(),
});

/// Resolves the session's open spread into cell grids.
///
/// The caret is drawn only when nothing is selected; an active selection
/// already shows where the next edit lands. Both are drawn only when their
/// spread is the one open in the view.
pub(crate) fn layout(session: &Session) -> SpreadLayout {
    let geometry = session.geometry();
    let current = session.current_spread_index();
    let spread = session.spread();

    let span = session.selection_span().filter(|s| s.spread == current);
    let (left_sel, right_sel) = match span {
        Some(s) if s.side == Side::Left => (Some((s.start, s.end)), None),
        Some(s) => (None, Some((s.start, s.end))),
        None => (None, None),
    };

    let caret = if span.is_some() {
        None
    } else {
        let at = session.cursor_coordinate();
        if at.spread == current {
            Some(at)
        } else {
            None
        }
    };
    let (left_caret, right_caret) = match caret {
        Some(at) if at.side == Side::Left => (Some(at.offset), None),
        Some(at) => (None, Some(at.offset)),
        None => (None, None),
    };

    SpreadLayout {
        left: build_page(&spread.left, geometry, left_sel, left_caret),
        right: build_page(&spread.right, geometry, right_sel, right_caret),
        current,
        total: session.total_spreads(),
    }
}

/// Lays one page slice out on the line grid.
///
/// Characters fill lines left to right and wrap at the line width; a newline
/// ends its line early. `sel` and `caret` are side-local character offsets.
fn build_page(
    slice: &str,
    geometry: PageGeometry,
    sel: Option<(usize, usize)>,
    caret: Option<usize>,
) -> Vec<Vec<(char, CellKind)>> {
    let cpl = geometry.chars_per_line();
    let lpp = geometry.lines_per_page();
    let mut rows: Vec<Vec<(char, CellKind)>> = vec![Vec::new()];
    let mut row = 0;
    let mut placed = 0;
    for (i, c) in slice.chars().enumerate() {
        placed = i + 1;
        let kind = cell_kind(i, sel, caret);
        if c == '\n' {
            // A marked newline still needs a visible cell, unless its line
            // is already full.
            if kind != CellKind::Plain && rows[row].len() < cpl {
                rows[row].push((' ', kind));
            }
            row += 1;
            if row >= lpp {
                break;
            }
            rows.push(Vec::new());
            continue;
        }
        if rows[row].len() >= cpl {
            row += 1;
            if row >= lpp {
                break;
            }
            rows.push(Vec::new());
        }
        rows[row].push((c, kind));
    }
    // A caret past the last character sits on a phantom cell.
    if caret == Some(placed) && row < lpp {
        if rows[row].len() >= cpl {
            row += 1;
            if row < lpp {
                rows.push(Vec::new());
            }
        }
        if row < lpp {
            rows[row].push((' ', CellKind::Caret));
        }
    }
    rows
}

fn cell_kind(i: usize, sel: Option<(usize, usize)>, caret: Option<usize>) -> CellKind {
    if caret == Some(i) {
        return CellKind::Caret;
    }
    match sel {
        Some((start, end)) if i >= start && i < end => CellKind::Selected,
        _ => CellKind::Plain,
    }
}

/// Full width of the drawn frame in terminal columns.
fn frame_width(geometry: PageGeometry) -> usize {
    // Two page cells, each padded by one space per side, plus three borders.
    2 * (geometry.chars_per_line() + 2) + 3
}

/// Renders the spread as plain text, one string per screen line.
pub(crate) fn frame(session: &Session) -> Vec<String> {
    let geometry = session.geometry();
    let grid = layout(session);
    let rule = "─".repeat(geometry.chars_per_line() + 2);
    let mut lines = Vec::with_capacity(geometry.lines_per_page() + 3);
    lines.push(format!("╭{}┬{}╮", rule, rule));
    for row in 0..geometry.lines_per_page() {
        lines.push(format!(
            "│ {} │ {} │",
            row_text(&grid.left, row, geometry),
            row_text(&grid.right, row, geometry),
        ));
    }
    lines.push(format!("╰{}┴{}╯", rule, rule));
    lines.push(dot_strip(grid.current, grid.total, frame_width(geometry)));
    lines
}

fn row_text(page: &[Vec<(char, CellKind)>], row: usize, geometry: PageGeometry) -> String {
    let mut text = String::with_capacity(geometry.chars_per_line());
    let mut filled = 0;
    if let Some(cells) = page.get(row) {
        for (c, _) in cells {
            text.push(*c);
            filled += 1;
        }
    }
    for _ in filled..geometry.chars_per_line() {
        text.push(' ');
    }
    text
}

fn dot_strip(current: usize, total: usize, width: usize) -> String {
    let strip_width = 2 * total - 1;
    if strip_width > width {
        // Too many spreads for dots.
        return center(&format!("{}/{}", current + 1, total), width);
    }
    let mut strip = String::new();
    for i in 0..total {
        if i > 0 {
            strip.push(' ');
        }
        strip.push(if i == current { '●' } else { '○' });
    }
    center(&strip, width)
}

fn center(text: &str, width: usize) -> String {
    let text_width = text.chars().count();
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - text_width) / 2), text)
}

/// Renders the spread with terminal styling, status and help lines included.
pub(crate) fn paint(session: &Session, status: &str) -> Vec<String> {
    let geometry = session.geometry();
    let grid = layout(session);
    let s = &*STYLES;
    let rule = "─".repeat(geometry.chars_per_line() + 2);
    let mut lines = Vec::with_capacity(geometry.lines_per_page() + 6);
    lines.push(s.frame.apply_to(format!("╭{}┬{}╮", rule, rule)).to_string());
    for row in 0..geometry.lines_per_page() {
        let border = s.frame.apply_to("│");
        lines.push(format!(
            "{} {} {} {} {}",
            border,
            paint_row(&grid.left, row, geometry),
            border,
            paint_row(&grid.right, row, geometry),
            border,
        ));
    }
    lines.push(s.frame.apply_to(format!("╰{}┴{}╯", rule, rule)).to_string());
    lines.push(paint_dots(grid.current, grid.total, frame_width(geometry)));
    lines.push(String::new());
    lines.push(s.status.apply_to(status).to_string());
    lines.push(s.status.apply_to(HELP_LINE).to_string());
    lines
}

fn paint_row(page: &[Vec<(char, CellKind)>], row: usize, geometry: PageGeometry) -> String {
    let mut out = String::new();
    let mut filled = 0;
    if let Some(cells) = page.get(row) {
        // Runs of one kind share a single escape sequence.
        let mut run = String::new();
        let mut run_kind = CellKind::Plain;
        for (c, kind) in cells {
            if *kind != run_kind && !run.is_empty() {
                out.push_str(&apply_kind(run_kind, &run));
                run.clear();
            }
            run_kind = *kind;
            run.push(*c);
            filled += 1;
        }
        if !run.is_empty() {
            out.push_str(&apply_kind(run_kind, &run));
        }
    }
    for _ in filled..geometry.chars_per_line() {
        out.push(' ');
    }
    out
}

fn apply_kind(kind: CellKind, text: &str) -> String {
    match kind {
        CellKind::Plain => text.to_string(),
        CellKind::Selected => STYLES.selected.apply_to(text).to_string(),
        CellKind::Caret => STYLES.caret.apply_to(text).to_string(),
    }
}

fn paint_dots(current: usize, total: usize, width: usize) -> String {
    let s = &*STYLES;
    let strip_width = 2 * total - 1;
    if strip_width > width {
        let text = format!("{}/{}", current + 1, total);
        return s.status.apply_to(center(&text, width)).to_string();
    }
    let mut strip = String::new();
    for i in 0..total {
        if i > 0 {
            strip.push(' ');
        }
        if i == current {
            strip.push_str(&s.dot_active.apply_to("●").to_string());
        } else {
            strip.push_str(&s.dot_idle.apply_to("○").to_string());
        }
    }
    format!("{}{}", " ".repeat((width - strip_width) / 2), strip)
}
