//! Header counters ("3 notes • 1 log", "2 pending").

use super::todos::pending_count;
use crate::model::log_entry::LogEntry;
use crate::model::note::Note;
use crate::model::todo::Todo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkspaceStats {
    pub notes: usize,
    pub todos: usize,
    pub pending_todos: usize,
    pub logs: usize,
}

impl WorkspaceStats {
    pub fn collect(notes: &[Note], todos: &[Todo], logs: &[LogEntry]) -> Self {
        Self {
            notes: notes.len(),
            todos: todos.len(),
            pending_todos: pending_count(todos),
            logs: logs.len(),
        }
    }

    pub fn notes_label(&self) -> String {
        pluralize(self.notes, "note", "notes")
    }

    pub fn logs_label(&self) -> String {
        pluralize(self.logs, "log", "logs")
    }

    pub fn pending_label(&self) -> String {
        format!("{} pending", self.pending_todos)
    }
}

/// `1 note`, `0 notes`, `2 notes`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::{pluralize, WorkspaceStats};

    #[test]
    fn labels_switch_at_one() {
        assert_eq!(pluralize(0, "log", "logs"), "0 logs");
        assert_eq!(pluralize(1, "log", "logs"), "1 log");
        let stats = WorkspaceStats {
            notes: 1,
            todos: 4,
            pending_todos: 2,
            logs: 3,
        };
        assert_eq!(stats.notes_label(), "1 note");
        assert_eq!(stats.logs_label(), "3 logs");
        assert_eq!(stats.pending_label(), "2 pending");
    }
}
