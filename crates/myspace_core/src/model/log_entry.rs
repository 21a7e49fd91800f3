//! Activity log entry.
//!
//! Entries are immutable after creation. The 200-character limit belongs to
//! the input surface; `LogEntry::new` stores whatever trimmed text it gets.

use super::id::RecordId;
use super::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum log text length accepted by input surfaces, in characters.
pub const LOG_TEXT_MAX_CHARS: usize = 200;

/// Timestamped "moment" in the quick logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(alias = "_id")]
    pub id: RecordId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(text: &str, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyLog);
        }

        Ok(Self {
            id: RecordId::generate(),
            text: text.to_string(),
            created_at: now,
        })
    }
}

/// Caps input to `LOG_TEXT_MAX_CHARS` characters (not bytes).
pub fn clamp_log_text(text: &str) -> String {
    text.chars().take(LOG_TEXT_MAX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::{clamp_log_text, LogEntry, LOG_TEXT_MAX_CHARS};
    use chrono::Utc;

    #[test]
    fn store_side_accepts_long_text() {
        let long = "x".repeat(LOG_TEXT_MAX_CHARS + 50);
        let entry = LogEntry::new(&long, Utc::now()).unwrap();
        assert_eq!(entry.text.chars().count(), LOG_TEXT_MAX_CHARS + 50);
    }

    #[test]
    fn clamp_counts_characters() {
        let text = "é".repeat(LOG_TEXT_MAX_CHARS + 1);
        assert_eq!(clamp_log_text(&text).chars().count(), LOG_TEXT_MAX_CHARS);
        assert_eq!(clamp_log_text("short"), "short");
    }
}
