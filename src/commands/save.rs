use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DaybookError, Result};
use crate::model::Note;
use crate::store::ContentStore;

pub fn run<S: ContentStore>(store: &mut S, content: &str) -> Result<CmdResult> {
    if content.trim().is_empty() {
        return Err(DaybookError::Api("Cannot save an empty page".to_string()));
    }

    let note = Note::capture(content.to_string());
    store.save_note(&note)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Page saved: {}",
        note.metadata.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}
