//! Note record.
//!
//! # Invariants
//! - `title` is never blank; blank input becomes `UNTITLED`.
//! - `updated_at >= created_at`, and both are equal until the first edit.

use super::id::RecordId;
use super::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title stored when a note is saved with a blank title.
pub const UNTITLED: &str = "Untitled";

/// Free-form titled note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Older front ends wrote this key as `_id`.
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a new note from raw form input.
    ///
    /// # Errors
    /// - `ValidationError::EmptyNote` when title and content are both blank.
    pub fn new(title: &str, content: &str, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let (title, content) = normalize_note_input(title, content)?;
        Ok(Self {
            id: RecordId::generate(),
            title,
            content,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces title and content, bumping `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even with a clock that
    /// stepped backwards.
    pub fn edit(
        &mut self,
        title: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        let (title, content) = normalize_note_input(title, content)?;
        self.title = title;
        self.content = content;
        self.updated_at = now.max(self.created_at);
        Ok(())
    }

    /// Whether the note was edited after creation.
    pub fn is_edited(&self) -> bool {
        self.updated_at != self.created_at
    }

    /// Title as shown in an edit form: the placeholder title edits as blank.
    pub fn editable_title(&self) -> &str {
        if self.title == UNTITLED {
            ""
        } else {
            self.title.as_str()
        }
    }
}

fn normalize_note_input(title: &str, content: &str) -> Result<(String, String), ValidationError> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() && content.is_empty() {
        return Err(ValidationError::EmptyNote);
    }

    let title = if title.is_empty() { UNTITLED } else { title };
    Ok((title.to_string(), content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{Note, UNTITLED};
    use crate::model::ValidationError;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn blank_title_defaults_to_untitled() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let note = Note::new("   ", " body ", now).unwrap();
        assert_eq!(note.title, UNTITLED);
        assert_eq!(note.content, "body");
        assert_eq!(note.editable_title(), "");
        assert!(!note.is_edited());
    }

    #[test]
    fn both_blank_is_rejected() {
        let now = Utc::now();
        assert_eq!(Note::new(" ", "\n", now), Err(ValidationError::EmptyNote));
    }

    #[test]
    fn edit_never_moves_updated_at_before_created_at() {
        let created = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut note = Note::new("a", "", created).unwrap();
        note.edit("b", "", created - Duration::minutes(3)).unwrap();
        assert_eq!(note.updated_at, created);
        assert_eq!(note.title, "b");
    }

    #[test]
    fn reads_legacy_underscore_id() {
        let json = r#"{"_id":"lq2x9k","title":"t","content":"c",
            "createdAt":"2024-01-02T03:04:05.000Z","updatedAt":"2024-01-02T03:04:05.000Z"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id.as_str(), "lq2x9k");
        let written = serde_json::to_value(&note).unwrap();
        assert!(written.get("id").is_some());
        assert!(written.get("createdAt").is_some());
    }
}
