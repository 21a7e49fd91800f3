//! Persistence adapter for the record collections.
//!
//! # Responsibility
//! - Define the durable key-value contract (`KeyValueStore`).
//! - Map typed collections to JSON values under fixed keys.
//!
//! # Invariants
//! - Each collection is written as one whole value; no partial writes.
//! - Reads fail soft: missing or unparseable values load as empty.

pub mod collection_repo;
pub mod kv_store;
