//! Todo operations on `WorkspaceStore`.

use super::workspace_store::{StoreResult, WorkspaceStore};
use crate::model::id::RecordId;
use crate::model::todo::Todo;
use crate::repo::collection_repo::Collection;
use crate::repo::kv_store::KeyValueStore;
use log::info;

impl<S: KeyValueStore> WorkspaceStore<S> {
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Adds a pending todo at the front of the collection.
    ///
    /// # Errors
    /// - `StoreError::Validation` when `text` is blank. Input surfaces treat
    ///   this as a silent no-op.
    pub fn create_todo(&mut self, text: &str) -> StoreResult<Todo> {
        let todo = Todo::new(text, self.now())?;
        self.todos.insert(0, todo.clone());
        self.commit(Collection::Todos);

        info!(
            "event=todo_create module=service status=ok todo_count={}",
            self.todos.len()
        );
        Ok(todo)
    }

    /// Flips `completed`; returns the new value, or `None` when `id` is absent.
    pub fn toggle_todo(&mut self, id: &RecordId) -> Option<bool> {
        let completed = self.todos.iter_mut().find(|todo| &todo.id == id).map(|todo| {
            todo.toggle();
            todo.completed
        });
        self.commit(Collection::Todos);

        info!(
            "event=todo_toggle module=service status=ok found={}",
            completed.is_some()
        );
        completed
    }

    /// Removes a todo; returns whether one was removed.
    pub fn delete_todo(&mut self, id: &RecordId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| &todo.id != id);
        let removed = self.todos.len() != before;
        self.commit(Collection::Todos);

        info!("event=todo_delete module=service status=ok removed={removed}");
        removed
    }
}
