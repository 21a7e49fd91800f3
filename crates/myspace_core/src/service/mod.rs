//! Record stores.
//!
//! # Responsibility
//! - Own the notes/todos/logs collections for one workspace.
//! - Apply create/update/toggle/delete rules, then persist before returning.
//!
//! # Invariants
//! - Callers never mutate collections directly; they read snapshots.
//! - Store and in-memory state never diverge after a successful write.

mod log_service;
mod note_service;
mod todo_service;
pub mod workspace_store;
