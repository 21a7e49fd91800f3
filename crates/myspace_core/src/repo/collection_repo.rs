//! Typed load/save of whole record collections.
//!
//! # Invariants
//! - `load` never fails: absent, unreadable or unparseable values load as an
//!   empty collection. This fallback is deliberate and logged at `warn`.
//! - `save` writes the full collection in one `KeyValueStore::set` call.

use crate::repo::kv_store::{KeyValueStore, StorageError};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Named collections persisted by core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    Notes,
    Todos,
    Logs,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Notes, Collection::Todos, Collection::Logs];

    /// Storage key for this collection.
    pub fn key(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Todos => "todos",
            Self::Logs => "logs",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Failed attempt to write one collection.
#[derive(Debug)]
pub struct PersistenceError {
    pub collection: Collection,
    pub kind: PersistenceErrorKind,
}

#[derive(Debug)]
pub enum PersistenceErrorKind {
    Serialize(serde_json::Error),
    Storage(StorageError),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PersistenceErrorKind::Serialize(err) => {
                write!(f, "failed to serialize `{}`: {err}", self.collection)
            }
            PersistenceErrorKind::Storage(err) => {
                write!(f, "failed to save `{}`: {err}", self.collection)
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            PersistenceErrorKind::Serialize(err) => Some(err),
            PersistenceErrorKind::Storage(err) => Some(err),
        }
    }
}

/// JSON collection adapter over any `KeyValueStore`.
pub struct CollectionRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CollectionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Loads a collection, substituting an empty one on any failure.
    pub fn load<T: DeserializeOwned>(&self, collection: Collection) -> Vec<T> {
        let raw = match self.store.get(collection.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(
                    "event=collection_load module=repo status=empty collection={collection} reason=absent"
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=collection_load module=repo status=fallback collection={collection} error_code=read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => {
                debug!(
                    "event=collection_load module=repo status=ok collection={collection} count={}",
                    records.len()
                );
                records
            }
            Err(err) => {
                warn!(
                    "event=collection_load module=repo status=fallback collection={collection} error_code=parse_failed line={} column={}",
                    err.line(),
                    err.column()
                );
                Vec::new()
            }
        }
    }

    /// Serializes and stores the full collection, replacing prior content.
    pub fn save<T: Serialize>(
        &mut self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(records).map_err(|err| PersistenceError {
            collection,
            kind: PersistenceErrorKind::Serialize(err),
        })?;

        self.store
            .set(collection.key(), &raw)
            .map_err(|err| PersistenceError {
                collection,
                kind: PersistenceErrorKind::Storage(err),
            })?;

        debug!(
            "event=collection_save module=repo status=ok collection={collection} count={} bytes={}",
            records.len(),
            raw.len()
        );
        Ok(())
    }
}
