//! Transient dashboard state driving the record stores.
//!
//! # Responsibility
//! - Hold form drafts, the note under edit and the pending delete target.
//! - Translate store outcomes into user-facing notices.
//!
//! # Invariants
//! - Nothing in this module is persisted; only `WorkspaceStore` writes.
//! - Empty todo/log drafts are ignored silently, an empty note draft is
//!   reported.

use crate::model::id::RecordId;
use crate::model::log_entry::{clamp_log_text, LogEntry};
use crate::model::note::Note;
use crate::model::todo::Todo;
use crate::repo::kv_store::KeyValueStore;
use crate::service::workspace_store::{StoreError, WorkspaceStore};
use crate::view::logs::{sort_logs, LogSort};
use crate::view::notes::{visible_notes, NoteSort};
use crate::view::stats::WorkspaceStats;
use crate::view::todos::{filter_todos, TodoFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Create,
    View,
    Logs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Toast-style message for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// One dashboard: the store plus everything the UI keeps between events.
pub struct DashboardSession<S: KeyValueStore> {
    store: WorkspaceStore<S>,
    pub note_title: String,
    pub note_content: String,
    pub todo_input: String,
    log_input: String,
    editing: Option<RecordId>,
    pending_delete: Option<RecordId>,
    pub active_tab: ActiveTab,
    pub search_query: String,
    pub note_sort: NoteSort,
    pub todo_filter: TodoFilter,
    pub log_sort: LogSort,
}

impl<S: KeyValueStore> DashboardSession<S> {
    pub fn new(store: WorkspaceStore<S>) -> Self {
        Self {
            store,
            note_title: String::new(),
            note_content: String::new(),
            todo_input: String::new(),
            log_input: String::new(),
            editing: None,
            pending_delete: None,
            active_tab: ActiveTab::default(),
            search_query: String::new(),
            note_sort: NoteSort::default(),
            todo_filter: TodoFilter::default(),
            log_sort: LogSort::default(),
        }
    }

    pub fn store(&self) -> &WorkspaceStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WorkspaceStore<S> {
        &mut self.store
    }

    pub fn editing(&self) -> Option<&RecordId> {
        self.editing.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&RecordId> {
        self.pending_delete.as_ref()
    }

    pub fn log_input(&self) -> &str {
        &self.log_input
    }

    /// Sets the logger draft, capped at 200 characters.
    pub fn set_log_input(&mut self, text: &str) {
        self.log_input = clamp_log_text(text);
    }

    /// Whether the save action (button or Ctrl+S) should be enabled.
    pub fn can_save_note(&self) -> bool {
        !self.note_title.trim().is_empty() || !self.note_content.trim().is_empty()
    }

    /// Creates a note from the drafts, or updates the note under edit.
    pub fn save_note(&mut self) -> Vec<Notice> {
        let notice = match self.editing.clone() {
            Some(id) => match self
                .store
                .update_note(&id, &self.note_title, &self.note_content)
            {
                Ok(_) => {
                    self.cancel_edit();
                    Notice::success("Note updated successfully!")
                }
                Err(StoreError::NotFound(_)) => {
                    // Drafts stay so the text can be saved as a new note.
                    self.editing = None;
                    Notice::error("This note no longer exists; it may have been deleted.")
                }
                Err(err) => Notice::error(err.to_string()),
            },
            None => match self.store.create_note(&self.note_title, &self.note_content) {
                Ok(_) => {
                    self.clear_note_form();
                    self.active_tab = ActiveTab::View;
                    Notice::success("Note saved successfully!")
                }
                Err(err) => Notice::error(err.to_string()),
            },
        };
        self.respond(Some(notice))
    }

    /// Loads a note into the drafts and switches to the editor.
    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        let Some(note) = self.store.note(id) else {
            return false;
        };
        self.note_title = note.editable_title().to_string();
        self.note_content = note.content.clone();
        self.editing = Some(id.clone());
        self.active_tab = ActiveTab::Create;
        true
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.clear_note_form();
    }

    /// Opens the delete confirmation for a note.
    pub fn request_delete(&mut self, id: &RecordId) {
        self.pending_delete = Some(id.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the note awaiting confirmation, if any.
    pub fn confirm_delete(&mut self) -> Vec<Notice> {
        let Some(id) = self.pending_delete.take() else {
            return Vec::new();
        };
        self.store.delete_note(&id);
        if self.editing.as_ref() == Some(&id) {
            self.cancel_edit();
        }
        self.respond(Some(Notice::success("Note deleted successfully!")))
    }

    /// Escape key: closes the delete prompt first, otherwise leaves edit mode.
    pub fn escape(&mut self) {
        if self.pending_delete.is_some() {
            self.pending_delete = None;
        } else if self.editing.is_some() {
            self.cancel_edit();
        }
    }

    pub fn add_todo(&mut self) -> Vec<Notice> {
        match self.store.create_todo(&self.todo_input) {
            Ok(_) => {
                self.todo_input.clear();
                self.respond(Some(Notice::success("Task added successfully!")))
            }
            Err(_) => self.respond(None),
        }
    }

    pub fn toggle_todo(&mut self, id: &RecordId) -> Vec<Notice> {
        self.store.toggle_todo(id);
        self.respond(None)
    }

    pub fn delete_todo(&mut self, id: &RecordId) -> Vec<Notice> {
        self.store.delete_todo(id);
        self.respond(Some(Notice::success("Task deleted successfully!")))
    }

    pub fn add_log(&mut self) -> Vec<Notice> {
        match self.store.create_log(&self.log_input) {
            Ok(_) => {
                self.log_input.clear();
                self.respond(Some(Notice::success("Moment logged successfully!")))
            }
            Err(_) => self.respond(None),
        }
    }

    pub fn delete_log(&mut self, id: &RecordId) -> Vec<Notice> {
        self.store.delete_log(id);
        self.respond(Some(Notice::success("Log deleted successfully!")))
    }

    /// Clears the log after the renderer obtained confirmation.
    ///
    /// Does nothing, and asks for no confirmation, when the log is empty.
    pub fn clear_logs(&mut self) -> Vec<Notice> {
        if self.store.logs().is_empty() {
            return Vec::new();
        }
        self.store.clear_logs();
        self.respond(Some(Notice::success("All logs cleared successfully!")))
    }

    pub fn visible_notes(&self) -> Vec<&Note> {
        visible_notes(self.store.notes(), &self.search_query, self.note_sort)
    }

    pub fn visible_todos(&self) -> Vec<&Todo> {
        filter_todos(self.store.todos(), self.todo_filter)
    }

    pub fn visible_logs(&self) -> Vec<&LogEntry> {
        sort_logs(self.store.logs(), self.log_sort)
    }

    pub fn stats(&self) -> WorkspaceStats {
        WorkspaceStats::collect(self.store.notes(), self.store.todos(), self.store.logs())
    }

    fn clear_note_form(&mut self) {
        self.note_title.clear();
        self.note_content.clear();
    }

    fn respond(&mut self, notice: Option<Notice>) -> Vec<Notice> {
        let mut notices: Vec<Notice> = notice.into_iter().collect();
        notices.extend(
            self.store
                .take_persistence_warnings()
                .into_iter()
                .map(|err| Notice {
                    kind: NoticeKind::Warning,
                    message: format!("Changes kept for this session only: {err}"),
                }),
        );
        notices
    }
}
