//! Note operations on `WorkspaceStore`.

use super::workspace_store::{StoreError, StoreResult, WorkspaceStore};
use crate::model::id::RecordId;
use crate::model::note::Note;
use crate::repo::collection_repo::Collection;
use crate::repo::kv_store::KeyValueStore;
use log::info;

impl<S: KeyValueStore> WorkspaceStore<S> {
    /// Current notes, most recently created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: &RecordId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    /// Creates a note at the front of the collection.
    ///
    /// # Errors
    /// - `StoreError::Validation` when title and content are both blank.
    pub fn create_note(&mut self, title: &str, content: &str) -> StoreResult<Note> {
        let note = Note::new(title, content, self.now())?;
        self.notes.insert(0, note.clone());
        self.commit(Collection::Notes);

        info!(
            "event=note_create module=service status=ok note_count={}",
            self.notes.len()
        );
        Ok(note)
    }

    /// Replaces title and content of an existing note.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when `id` is absent (e.g. deleted elsewhere).
    /// - `StoreError::Validation` when title and content are both blank.
    pub fn update_note(&mut self, id: &RecordId, title: &str, content: &str) -> StoreResult<Note> {
        let now = self.now();
        let note = self
            .notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        note.edit(title, content, now)?;
        let updated = note.clone();
        self.commit(Collection::Notes);

        info!("event=note_update module=service status=ok");
        Ok(updated)
    }

    /// Removes a note; returns whether one was removed.
    pub fn delete_note(&mut self, id: &RecordId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        let removed = self.notes.len() != before;
        self.commit(Collection::Notes);

        info!("event=note_delete module=service status=ok removed={removed}");
        removed
    }
}
