//! `WorkspaceStore`: the single owner of all record collections.
//!
//! # Invariants
//! - Every mutating call writes the whole affected collection before returning.
//! - A failed write keeps the in-memory change, marks the collection dirty
//!   and queues a warning; nothing is retried automatically.
//! - At most `MAX_PENDING_WARNINGS` warnings are queued; the oldest are
//!   dropped first when callers never drain them.

use crate::model::id::RecordId;
use crate::model::log_entry::LogEntry;
use crate::model::note::Note;
use crate::model::todo::Todo;
use crate::model::ValidationError;
use crate::repo::collection_repo::{Collection, CollectionRepository, PersistenceError};
use crate::repo::kv_store::KeyValueStore;
use crate::time::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Undrained write failures kept before the oldest are discarded.
pub const MAX_PENDING_WARNINGS: usize = 32;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Required input was blank; nothing changed.
    Validation(ValidationError),
    /// Targeted record does not exist.
    NotFound(RecordId),
    /// Explicit `flush` could not write a dirty collection.
    Persistence(PersistenceError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistenceError> for StoreError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// Owner of the three record collections of one workspace.
pub struct WorkspaceStore<S: KeyValueStore> {
    repo: CollectionRepository<S>,
    clock: Arc<dyn Clock>,
    pub(super) notes: Vec<Note>,
    pub(super) todos: Vec<Todo>,
    pub(super) logs: Vec<LogEntry>,
    dirty: BTreeSet<Collection>,
    warnings: Vec<PersistenceError>,
}

impl<S: KeyValueStore> WorkspaceStore<S> {
    /// Loads all collections from `store` using the wall clock.
    pub fn open(store: S) -> Self {
        Self::open_with_clock(store, Arc::new(SystemClock))
    }

    /// Loads all collections from `store`, stamping records with `clock`.
    pub fn open_with_clock(store: S, clock: Arc<dyn Clock>) -> Self {
        let repo = CollectionRepository::new(store);
        let notes: Vec<Note> = repo.load(Collection::Notes);
        let todos: Vec<Todo> = repo.load(Collection::Todos);
        let logs: Vec<LogEntry> = repo.load(Collection::Logs);
        info!(
            "event=workspace_open module=service status=ok notes={} todos={} logs={}",
            notes.len(),
            todos.len(),
            logs.len()
        );

        Self {
            repo,
            clock,
            notes,
            todos,
            logs,
            dirty: BTreeSet::new(),
            warnings: Vec::new(),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn repository(&self) -> &CollectionRepository<S> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut CollectionRepository<S> {
        &mut self.repo
    }

    /// Collections whose last write failed and are ahead of the store.
    pub fn dirty_collections(&self) -> Vec<Collection> {
        self.dirty.iter().copied().collect()
    }

    /// Drains write failures queued since the last call.
    ///
    /// Callers using the store directly should drain this after mutations;
    /// only the newest `MAX_PENDING_WARNINGS` failures are retained.
    pub fn take_persistence_warnings(&mut self) -> Vec<PersistenceError> {
        std::mem::take(&mut self.warnings)
    }

    /// Re-writes every dirty collection on explicit request.
    ///
    /// # Errors
    /// - Returns the first write failure; collections not yet written stay dirty.
    pub fn flush(&mut self) -> StoreResult<()> {
        for collection in self.dirty_collections() {
            self.write_collection(collection)?;
            self.dirty.remove(&collection);
        }
        Ok(())
    }

    /// Persists one collection after an in-memory mutation.
    pub(super) fn commit(&mut self, collection: Collection) {
        match self.write_collection(collection) {
            Ok(()) => {
                self.dirty.remove(&collection);
            }
            Err(err) => {
                warn!(
                    "event=collection_commit module=service status=error collection={collection} error_code=persist_failed error={err}"
                );
                self.dirty.insert(collection);
                if self.warnings.len() == MAX_PENDING_WARNINGS {
                    self.warnings.remove(0);
                }
                self.warnings.push(err);
            }
        }
    }

    fn write_collection(&mut self, collection: Collection) -> Result<(), PersistenceError> {
        match collection {
            Collection::Notes => self.repo.save(collection, &self.notes),
            Collection::Todos => self.repo.save(collection, &self.todos),
            Collection::Logs => self.repo.save(collection, &self.logs),
        }
    }
}
