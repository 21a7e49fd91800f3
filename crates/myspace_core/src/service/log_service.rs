//! Log operations on `WorkspaceStore`. Entries are immutable once created.

use super::workspace_store::{StoreResult, WorkspaceStore};
use crate::model::id::RecordId;
use crate::model::log_entry::LogEntry;
use crate::repo::collection_repo::Collection;
use crate::repo::kv_store::KeyValueStore;
use log::info;

impl<S: KeyValueStore> WorkspaceStore<S> {
    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Records a moment at the front of the log.
    ///
    /// Length limits are not enforced here; see `clamp_log_text`.
    pub fn create_log(&mut self, text: &str) -> StoreResult<LogEntry> {
        let entry = LogEntry::new(text, self.now())?;
        self.logs.insert(0, entry.clone());
        self.commit(Collection::Logs);

        info!(
            "event=log_create module=service status=ok log_count={}",
            self.logs.len()
        );
        Ok(entry)
    }

    /// Removes one entry; returns whether one was removed.
    pub fn delete_log(&mut self, id: &RecordId) -> bool {
        let before = self.logs.len();
        self.logs.retain(|entry| &entry.id != id);
        let removed = self.logs.len() != before;
        self.commit(Collection::Logs);

        info!("event=log_delete module=service status=ok removed={removed}");
        removed
    }

    /// Empties the log unconditionally; returns how many entries were dropped.
    pub fn clear_logs(&mut self) -> usize {
        let cleared = self.logs.len();
        self.logs.clear();
        self.commit(Collection::Logs);

        info!("event=log_clear module=service status=ok cleared={cleared}");
        cleared
    }
}
