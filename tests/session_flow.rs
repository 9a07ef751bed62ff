//! One writing session end to end: typing across a spread boundary,
//! clipboard edits, and handing the finished page to the store and the
//! workflow through the API facade.

use daybook::api::DaybookApi;
use daybook::clipboard::{Clipboard, MemoryClipboard};
use daybook::engine::{EditCommand, PageGeometry, Session};
use daybook::error::Result;
use daybook::model::NoteKind;
use daybook::store::memory::InMemoryStore;
use daybook::workflow::{PackOutcome, PackPayload, PackReport, WorkflowTrigger};
use serde_json::json;
use std::path::PathBuf;

// Page capacity 10, spread capacity 20.
fn tiny() -> PageGeometry {
    PageGeometry::new(5, 2)
}

fn type_text(session: &mut Session, clipboard: &mut MemoryClipboard, text: &str) {
    for c in text.chars() {
        session.apply(EditCommand::typed(c), clipboard).unwrap();
    }
}

/// Answers like the automation does: an envelope whose `data` is a JSON
/// string, with the original field spellings.
struct ArmedWorkflow;

impl WorkflowTrigger for ArmedWorkflow {
    fn submit(&self, _payload: &PackPayload) -> Result<PackOutcome> {
        let inner = json!({
            "待办": ["ring Maya"],
            "distilled_insights": { "经验": ["pack before midnight"] }
        });
        let body = json!({
            "message": "Workflow was started.",
            "data": serde_json::to_string(&inner).unwrap()
        });
        Ok(PackOutcome::Completed(PackReport::from_value(body)))
    }
}

/// Accepts the page but never answers in time.
struct SilentWorkflow;

impl WorkflowTrigger for SilentWorkflow {
    fn submit(&self, _payload: &PackPayload) -> Result<PackOutcome> {
        Ok(PackOutcome::Pending)
    }
}

#[test]
fn test_typing_across_the_spread_boundary_turns_the_page() {
    let mut session = Session::new(tiny());
    let mut clipboard = MemoryClipboard::new();

    type_text(&mut session, &mut clipboard, &"a".repeat(20));
    // The cursor sits on the edge of the full spread; the view stays on it.
    assert_eq!(session.current_spread_index(), 0);
    assert_eq!(session.total_spreads(), 1);

    type_text(&mut session, &mut clipboard, "b");
    // One more character opens the next spread and the view follows.
    assert_eq!(session.current_spread_index(), 1);
    assert_eq!(session.total_spreads(), 2);
    assert_eq!(session.spread().left, "b");
}

#[test]
fn test_leafing_back_then_typing_snaps_to_the_cursor() {
    let mut session = Session::new(tiny());
    let mut clipboard = MemoryClipboard::new();
    type_text(&mut session, &mut clipboard, &"x".repeat(25));
    assert_eq!(session.current_spread_index(), 1);

    session.apply(EditCommand::PageBack, &mut clipboard).unwrap();
    assert_eq!(session.current_spread_index(), 0);

    // The cursor stayed behind on spread 1; typing pulls the view back.
    type_text(&mut session, &mut clipboard, "y");
    assert_eq!(session.current_spread_index(), 1);
    assert_eq!(session.text().chars().count(), 26);
}

#[test]
fn test_cut_from_one_page_pastes_onto_another() {
    let mut session = Session::with_text("the quick brown fox jumps over", tiny());
    let mut clipboard = MemoryClipboard::new();

    session.select_range(4, 10);
    session.apply(EditCommand::Cut, &mut clipboard).unwrap();
    assert_eq!(clipboard.read_text().unwrap(), "quick ");
    assert_eq!(session.text(), "the brown fox jumps over");
    assert_eq!(session.draft().cursor(), 4);

    session.move_cursor_to(session.text().chars().count());
    session.apply(EditCommand::Paste, &mut clipboard).unwrap();
    assert_eq!(session.text(), "the brown fox jumps overquick ");
}

#[test]
fn test_select_all_cut_leaves_a_blank_first_spread() {
    let mut session = Session::with_text("a".repeat(45), tiny());
    let mut clipboard = MemoryClipboard::new();

    session
        .apply(EditCommand::GotoSpread(2), &mut clipboard)
        .unwrap();
    session
        .apply(EditCommand::SelectAll, &mut clipboard)
        .unwrap();
    session.apply(EditCommand::Cut, &mut clipboard).unwrap();

    assert!(session.draft().is_empty());
    assert_eq!(clipboard.read_text().unwrap().chars().count(), 45);
    assert_eq!(session.total_spreads(), 1);
    assert_eq!(session.current_spread_index(), 0);
}

#[test]
fn test_saved_page_shows_up_in_results() {
    let mut session = Session::new(tiny());
    let mut clipboard = MemoryClipboard::new();
    type_text(&mut session, &mut clipboard, "ring Maya\nbook flights");

    let mut api = DaybookApi::new(InMemoryStore::new(), SilentWorkflow, PathBuf::new());
    let result = api.save_page(session.text()).unwrap();
    session.clear();

    assert_eq!(result.affected_notes[0].metadata.title, "ring Maya");
    assert!(session.draft().is_empty());

    let listed = api.results().unwrap().listed_notes;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].metadata.kind, NoteKind::Capture);
    assert_eq!(listed[0].content, "ring Maya\nbook flights");
}

#[test]
fn test_packed_page_stores_the_normalized_report() {
    let mut api = DaybookApi::new(InMemoryStore::new(), ArmedWorkflow, PathBuf::new());
    let result = api.pack_page("rang nobody all day").unwrap();

    let report = result.report.expect("completed pack carries a report");
    assert_eq!(report.tasks, vec!["ring Maya"]);
    assert_eq!(report.insights, vec!["pack before midnight"]);

    // The stored copy reads back identically through `results`.
    let results = api.results().unwrap();
    assert!(results
        .listed_notes
        .iter()
        .any(|n| n.metadata.kind == NoteKind::Report));
    assert_eq!(results.report, Some(report));
}

#[test]
fn test_timed_out_pack_is_pending_not_an_error() {
    let mut api = DaybookApi::new(InMemoryStore::new(), SilentWorkflow, PathBuf::new());
    let result = api.pack_page("slow day").unwrap();

    assert!(result.pending);
    assert!(result.report.is_none());
    // Nothing was stored; the page stays with the writer.
    assert!(api.results().unwrap().listed_notes.is_empty());
}
