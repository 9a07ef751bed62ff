//! # Storage Layer
//!
//! This module defines the storage abstraction for daybook. The
//! [`ContentStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Metadata stored in `data.json`
//!   - Note content in individual files: `note-{uuid}.txt`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── data.json           # Metadata for all notes
//! ├── note-{uuid}.txt     # Individual note content files
//! └── config.json         # Daybook configuration
//! ```
//!
//! Metadata and content are stored separately so listing notes doesn't
//! require reading all content files.

use crate::error::Result;
use crate::model::Note;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Abstract interface for note storage.
pub trait ContentStore {
    /// Save a note (create or update)
    fn save_note(&mut self, note: &Note) -> Result<()>;

    /// Get a note by ID
    fn get_note(&self, id: &Uuid) -> Result<Note>;

    /// List all notes
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Delete a note permanently
    fn delete_note(&mut self, id: &Uuid) -> Result<()>;
}
