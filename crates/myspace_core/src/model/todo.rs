//! Todo record.

use super::id::RecordId;
use super::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(alias = "_id")]
    pub id: RecordId,
    /// Never empty.
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Builds a pending todo from raw input text.
    pub fn new(text: &str, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyTodo);
        }

        Ok(Self {
            id: RecordId::generate(),
            text: text.to_string(),
            completed: false,
            created_at: now,
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
