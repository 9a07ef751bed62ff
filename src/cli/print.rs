//! Output formatting for the non-interactive commands.

use chrono::{DateTime, Utc};
use colored::Colorize;
use daybook::api::{CmdMessage, MessageLevel};
use daybook::model::{Note, NoteKind};
use daybook::workflow::PackReport;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const REPORT_MARKER: &str = "✦";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per note, newest first: a marker column, the note text, and a
/// right-aligned age column.
pub(crate) fn print_notes(notes: &[Note]) {
    for note in notes {
        let left_prefix = match note.metadata.kind {
            NoteKind::Report => format!("  {} ", REPORT_MARKER),
            NoteKind::Capture => "    ".to_string(),
        };
        let left_prefix_width = left_prefix.width();

        let time_ago = format_time_ago(note.metadata.created_at);

        // Reports carry JSON payloads; show their title instead.
        let text = match note.metadata.kind {
            NoteKind::Report => note.metadata.title.clone(),
            NoteKind::Capture => flatten_preview(&note.content),
        };

        let fixed_width = left_prefix_width + 2 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let text_display = truncate_to_width(&text, available);
        let padding = available.saturating_sub(text_display.width());

        let text_colored = match note.metadata.kind {
            NoteKind::Report => text_display.yellow(),
            NoteKind::Capture => text_display.normal(),
        };

        println!(
            "{}{}{}  {}",
            left_prefix,
            text_colored,
            " ".repeat(padding),
            time_ago.dimmed()
        );
    }
}

/// Prints the distilled report the workflow sent back, section by section.
pub(crate) fn print_report(report: &PackReport) {
    if report.is_empty() {
        println!("{}", "The workflow sent back an empty report.".dimmed());
        return;
    }

    let mut sections = 0;

    if !report.tasks.is_empty() {
        println!("{}", "Tasks".bold());
        for (i, task) in report.tasks.iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).yellow(), task);
        }
        sections += 1;
    }

    if !report.insights.is_empty() {
        if sections > 0 {
            println!();
        }
        println!("{}", "Insights".bold());
        for insight in &report.insights {
            println!("  {} {}", "·".yellow(), insight);
        }
        sections += 1;
    }

    if !report.drafts.is_empty() {
        if sections > 0 {
            println!();
        }
        println!("{}", "Drafts".bold());
        for (i, draft) in report.drafts.iter().enumerate() {
            if i > 0 {
                println!();
            }
            let label = format!("[{}]", draft.platform);
            match &draft.title {
                Some(title) => println!("  {} {}", label.yellow(), title.bold()),
                None => println!("  {}", label.yellow()),
            }
            for line in draft.content.lines() {
                println!("  {}", line);
            }
        }
    }
}

fn flatten_preview(content: &str) -> String {
    content
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Singular units are one column narrower; pad so the ages line up.
    let time_str = time_str
        .replace("hour ago", "hour  ago")
        .replace("minute ago", "minute  ago")
        .replace("second ago", "second  ago")
        .replace("day ago", "day  ago")
        .replace("week ago", "week  ago")
        .replace("month ago", "month  ago")
        .replace("year ago", "year  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("morning pages", 40), "morning pages");
    }

    #[test]
    fn test_truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(flatten_preview("dear diary\ntoday"), "dear diary today");
    }
}
