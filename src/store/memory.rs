use super::ContentStore;
use crate::error::{DaybookError, Result};
use crate::model::Note;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory store used by tests and headless callers. Nothing persists.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    notes: HashMap<Uuid, Note>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for InMemoryStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        self.notes.insert(note.metadata.id, note.clone());
        Ok(())
    }

    fn get_note(&self, id: &Uuid) -> Result<Note> {
        self.notes
            .get(id)
            .cloned()
            .ok_or(DaybookError::NoteNotFound(*id))
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self.notes.values().cloned().collect())
    }

    fn delete_note(&mut self, id: &Uuid) -> Result<()> {
        self.notes
            .remove(id)
            .map(|_| ())
            .ok_or(DaybookError::NoteNotFound(*id))
    }
}

/// Prebuilt stores for tests.
#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{DateTime, Utc};

    /// Builder that assembles an [`InMemoryStore`] with known contents.
    #[derive(Default)]
    pub struct StoreFixture {
        notes: Vec<Note>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_capture(mut self, content: &str) -> Self {
            self.notes.push(Note::capture(content.to_string()));
            self
        }

        pub fn with_report(mut self, title: &str, content: &str) -> Self {
            self.notes
                .push(Note::report(title.to_string(), content.to_string()));
            self
        }

        /// Re-dates the most recently added note.
        pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
            if let Some(note) = self.notes.last_mut() {
                note.metadata.created_at = at;
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            let mut store = InMemoryStore::new();
            for note in &self.notes {
                store
                    .save_note(note)
                    .expect("in-memory save cannot fail");
            }
            store
        }
    }
}
