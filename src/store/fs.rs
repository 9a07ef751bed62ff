use super::ContentStore;
use crate::error::{DaybookError, Result};
use crate::model::{Metadata, Note};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn note_filename(id: &Uuid) -> String {
        format!("note-{}.txt", id)
    }

    fn note_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(Self::note_filename(id))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DaybookError::Io)?;
        }
        Ok(())
    }

    fn load_metadata(&self) -> Result<HashMap<Uuid, Metadata>> {
        let data_file = self.root.join("data.json");
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(DaybookError::Io)?;
        let meta: HashMap<Uuid, Metadata> =
            serde_json::from_str(&content).map_err(DaybookError::Serialization)?;
        Ok(meta)
    }

    fn save_metadata(&self, meta: &HashMap<Uuid, Metadata>) -> Result<()> {
        let data_file = self.root.join("data.json");
        let content = serde_json::to_string_pretty(meta).map_err(DaybookError::Serialization)?;
        fs::write(data_file, content).map_err(DaybookError::Io)?;
        Ok(())
    }

    fn read_content(&self, id: &Uuid) -> Result<String> {
        let path = self.note_path(id);
        if !path.exists() {
            // Metadata without its content file: treat as an empty note
            // rather than failing the whole listing.
            return Ok(String::new());
        }
        fs::read_to_string(path).map_err(DaybookError::Io)
    }
}

impl ContentStore for FileStore {
    fn save_note(&mut self, note: &Note) -> Result<()> {
        self.ensure_dir()?;

        // 1. Update metadata index
        let mut meta_map = self.load_metadata()?;
        meta_map.insert(note.metadata.id, note.metadata.clone());
        self.save_metadata(&meta_map)?;

        // 2. Write content file
        fs::write(self.note_path(&note.metadata.id), &note.content).map_err(DaybookError::Io)?;

        Ok(())
    }

    fn get_note(&self, id: &Uuid) -> Result<Note> {
        let meta_map = self.load_metadata()?;
        let metadata = meta_map
            .get(id)
            .ok_or(DaybookError::NoteNotFound(*id))?
            .clone();
        let content = self.read_content(id)?;
        Ok(Note { metadata, content })
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let meta_map = self.load_metadata()?;
        let mut notes = Vec::new();

        for (id, metadata) in meta_map {
            let content = self.read_content(&id)?;
            notes.push(Note { metadata, content });
        }

        Ok(notes)
    }

    fn delete_note(&mut self, id: &Uuid) -> Result<()> {
        // 1. Remove from metadata
        let mut meta_map = self.load_metadata()?;
        if meta_map.remove(id).is_none() {
            return Err(DaybookError::NoteNotFound(*id));
        }
        self.save_metadata(&meta_map)?;

        // 2. Delete the content file
        let path = self.note_path(id);
        if path.exists() {
            fs::remove_file(path).map_err(DaybookError::Io)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_get_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let note = Note::capture("remember the milk".to_string());
        store.save_note(&note).unwrap();

        let loaded = store.get_note(&note.metadata.id).unwrap();
        assert_eq!(loaded.content, "remember the milk");
        assert_eq!(loaded.metadata.title, "remember the milk");
    }

    #[test]
    fn test_list_reads_all_notes() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.save_note(&Note::capture("one".to_string())).unwrap();
        store.save_note(&Note::capture("two".to_string())).unwrap();

        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn test_get_missing_note_fails() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        let id = Uuid::new_v4();
        assert!(matches!(
            store.get_note(&id),
            Err(DaybookError::NoteNotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn test_delete_removes_metadata_and_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let note = Note::capture("short lived".to_string());
        store.save_note(&note).unwrap();
        store.delete_note(&note.metadata.id).unwrap();

        assert!(store.get_note(&note.metadata.id).is_err());
        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn test_listing_empty_root_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing_here"));
        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn test_missing_content_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let note = Note::capture("vanishing".to_string());
        store.save_note(&note).unwrap();
        fs::remove_file(store.note_path(&note.metadata.id)).unwrap();

        let loaded = store.get_note(&note.metadata.id).unwrap();
        assert_eq!(loaded.content, "");
    }
}
