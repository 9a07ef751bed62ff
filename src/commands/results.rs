use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteKind;
use crate::store::ContentStore;
use crate::workflow::PackReport;
use chrono::Local;

/// Lists today's notes and re-reads the newest pack report, if any.
pub fn run<S: ContentStore>(store: &S) -> Result<CmdResult> {
    let today = Local::now().date_naive();
    let mut notes: Vec<_> = store
        .list_notes()?
        .into_iter()
        .filter(|note| note.metadata.created_at.with_timezone(&Local).date_naive() == today)
        .collect();
    notes.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));

    let report = notes
        .iter()
        .find(|note| note.metadata.kind == NoteKind::Report)
        .map(|note| PackReport::from_response(&note.content));

    let mut result = CmdResult::default();
    if notes.is_empty() {
        result.add_message(CmdMessage::info("Nothing in the daybook for today yet"));
    } else if report.is_none() {
        result.add_message(CmdMessage::info(
            "No pack report for today yet. Pack a page with Ctrl-P in the notebook",
        ));
    }

    result = result.with_listed_notes(notes);
    if let Some(report) = report {
        result = result.with_report(report);
    }
    Ok(result)
}
