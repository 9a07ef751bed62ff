//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for daybook operations, regardless of the UI driving
//! them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! The API explicitly avoids:
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over Capabilities
//!
//! `DaybookApi<S: ContentStore, W: WorkflowTrigger>` is generic over both
//! external collaborators:
//! - Production: `DaybookApi<FileStore, WebhookTrigger>`
//! - Testing: `DaybookApi<InMemoryStore, StubTrigger>`
//!
//! This enables testing the full command surface without a filesystem or a
//! network.

use crate::commands;
use crate::error::Result;
use crate::store::ContentStore;
use crate::workflow::WorkflowTrigger;
use std::path::{Path, PathBuf};

/// The main API facade for daybook operations.
pub struct DaybookApi<S: ContentStore, W: WorkflowTrigger> {
    store: S,
    trigger: W,
    data_dir: PathBuf,
}

impl<S: ContentStore, W: WorkflowTrigger> DaybookApi<S, W> {
    pub fn new(store: S, trigger: W, data_dir: PathBuf) -> Self {
        Self {
            store,
            trigger,
            data_dir,
        }
    }

    /// Saves the page text as a capture note.
    pub fn save_page(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, content)
    }

    /// Sends the page text through the workflow and stores a completed report.
    pub fn pack_page(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::pack::run(&mut self.store, &self.trigger, content)
    }

    /// Today's notes plus the newest pack report.
    pub fn results(&self) -> Result<commands::CmdResult> {
        commands::results::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::store::ContentStore;
    use crate::workflow::fixtures::StubTrigger;
    use crate::workflow::PackReport;
    use tempfile::tempdir;

    fn api(dir: &Path) -> DaybookApi<InMemoryStore, StubTrigger> {
        DaybookApi::new(
            InMemoryStore::new(),
            StubTrigger::completing(PackReport::default()),
            dir.to_path_buf(),
        )
    }

    #[test]
    fn test_save_page_dispatches_to_the_store() {
        let dir = tempdir().unwrap();
        let mut api = api(dir.path());
        api.save_page("kept a promise today").unwrap();
        assert_eq!(api.store.list_notes().unwrap().len(), 1);
    }

    #[test]
    fn test_config_reads_from_the_data_dir() {
        let dir = tempdir().unwrap();
        let api = api(dir.path());
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert!(result.config.is_some());
    }
}
