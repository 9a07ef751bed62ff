use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest title kept in metadata; anything longer is cut and marked.
pub const TITLE_MAX_CHARS: usize = 50;

/// What a stored note holds: a raw capture or a packed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteKind {
    Capture,
    Report,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub kind: NoteKind,
    // We store the title in metadata to list without reading content files
    pub title: String,
}

impl Metadata {
    pub fn new(kind: NoteKind, title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            kind,
            title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub metadata: Metadata,
    pub content: String,
}

impl Note {
    /// A raw capture; the title is derived from the content itself.
    pub fn capture(content: String) -> Self {
        Self {
            metadata: Metadata::new(NoteKind::Capture, derive_title(&content)),
            content,
        }
    }

    /// A packed report with an explicit title.
    pub fn report(title: String, content: String) -> Self {
        Self {
            metadata: Metadata::new(NoteKind::Report, title),
            content,
        }
    }
}

/// Derives a listing title from note content: the first line with anything on
/// it, cut to [`TITLE_MAX_CHARS`] characters.
pub fn derive_title(content: &str) -> String {
    let line = content
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    if line.is_empty() {
        return "Untitled".to_string();
    }
    if line.chars().count() > TITLE_MAX_CHARS {
        let cut: String = line.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}…", cut)
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_first_non_empty_line() {
        assert_eq!(derive_title("\n\n  meeting notes  \nmore"), "meeting notes");
    }

    #[test]
    fn test_title_cut_at_fifty_chars() {
        let long = "a".repeat(80);
        let title = derive_title(&long);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS + 1);
        assert!(title.ends_with('…'));
    }

    #[test]
    fn test_short_title_has_no_ellipsis() {
        assert_eq!(derive_title("quick thought"), "quick thought");
    }

    #[test]
    fn test_blank_content_titled_untitled() {
        assert_eq!(derive_title("  \n\t\n"), "Untitled");
    }

    #[test]
    fn test_capture_derives_title() {
        let note = Note::capture("buy more coffee\nand filters".to_string());
        assert_eq!(note.metadata.title, "buy more coffee");
        assert_eq!(note.metadata.kind, NoteKind::Capture);
    }

    #[test]
    fn test_report_keeps_given_title() {
        let note = Note::report("Pack report".to_string(), "{}".to_string());
        assert_eq!(note.metadata.kind, NoteKind::Report);
        assert_eq!(note.metadata.title, "Pack report");
    }
}
