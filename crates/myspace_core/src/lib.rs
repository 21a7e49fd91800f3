//! Core domain logic for MySpace: notes, todos and the quick logger.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;
pub mod time;
pub mod view;

pub use config::{WorkspaceConfig, DEFAULT_DB_FILE_NAME, MIN_TICK_INTERVAL};
pub use logging::{init_logging_with, logging_status, LogLevel};
pub use model::id::RecordId;
pub use model::log_entry::{clamp_log_text, LogEntry, LOG_TEXT_MAX_CHARS};
pub use model::note::{Note, UNTITLED};
pub use model::todo::Todo;
pub use model::ValidationError;
pub use repo::collection_repo::{
    Collection, CollectionRepository, PersistenceError, PersistenceErrorKind,
};
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use service::workspace_store::{
    StoreError, StoreResult, WorkspaceStore, MAX_PENDING_WARNINGS,
};
pub use session::{ActiveTab, DashboardSession, Notice, NoticeKind};
pub use time::format::{format_log_timestamp, format_relative_age, ClockReading};
pub use time::ticker::{ClockTicker, DEFAULT_TICK_INTERVAL};
pub use time::{reference_zone, Clock, FixedClock, SystemClock};
pub use view::logs::{sort_logs, LogSort};
pub use view::notes::{
    compare_titles, filter_notes, sort_notes, truncate_content, visible_notes, NoteSort,
};
pub use view::stats::{pluralize, WorkspaceStats};
pub use view::todos::{filter_todos, pending_count, TodoFilter};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
