//! Record model for the notes/todos/logs collections.
//!
//! # Responsibility
//! - Define the three flat record shapes persisted by core.
//! - Own creation-time validation for required text inputs.
//!
//! # Invariants
//! - Every record is identified by an opaque `RecordId`.
//! - Records are serialized with camelCase keys and RFC 3339 timestamps.

pub mod id;
pub mod log_entry;
pub mod note;
pub mod todo;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected user input for record creation or edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Note title and content are both blank after trimming.
    EmptyNote,
    /// Todo text is blank after trimming.
    EmptyTodo,
    /// Log text is blank after trimming.
    EmptyLog,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNote => write!(f, "Please enter a title or content for your note."),
            Self::EmptyTodo => write!(f, "todo text cannot be empty"),
            Self::EmptyLog => write!(f, "log text cannot be empty"),
        }
    }
}

impl Error for ValidationError {}
