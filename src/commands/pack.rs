use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DaybookError, Result};
use crate::model::Note;
use crate::store::ContentStore;
use crate::workflow::{PackOutcome, PackPayload, WorkflowTrigger};
use chrono::Local;

pub fn run<S: ContentStore, W: WorkflowTrigger>(
    store: &mut S,
    trigger: &W,
    content: &str,
) -> Result<CmdResult> {
    if content.trim().is_empty() {
        return Err(DaybookError::Api("Cannot pack an empty page".to_string()));
    }

    let payload = PackPayload::new(content.to_string());
    match trigger.submit(&payload)? {
        PackOutcome::Completed(report) => {
            // Keep the normalized report so `results` can re-read it later.
            let stored =
                serde_json::to_string_pretty(&report).map_err(DaybookError::Serialization)?;
            let title = format!("Pack report · {}", Local::now().format("%Y-%m-%d"));
            let note = Note::report(title, stored);
            store.save_note(&note)?;

            let mut result = CmdResult::default()
                .with_affected_notes(vec![note])
                .with_report(report);
            result.add_message(CmdMessage::success("Page packed"));
            Ok(result)
        }
        PackOutcome::Pending => {
            let mut result = CmdResult::default().with_pending();
            result.add_message(CmdMessage::warning(
                "No answer before the timeout; the workflow is likely still running. \
                 The page was kept.",
            ));
            Ok(result)
        }
    }
}
