//! Workspace configuration.
//!
//! # Invariants
//! - `log_dir`, when set, is absolute.
//! - `tick_interval` is never below `MIN_TICK_INTERVAL`.

use crate::logging::{init_logging_with, normalize_log_dir, LogLevel};
use crate::repo::kv_store::{SqliteKeyValueStore, StorageError, StorageResult};
use crate::service::workspace_store::WorkspaceStore;
use crate::session::DashboardSession;
use crate::time::ticker::DEFAULT_TICK_INTERVAL;
use crate::time::{Clock, SystemClock};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// File name used when a directory is given instead of a database path.
pub const DEFAULT_DB_FILE_NAME: &str = "myspace.sqlite3";
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// SQLite file backing the store; `None` keeps data in memory only.
    pub db_path: Option<PathBuf>,
    pub log_level: LogLevel,
    /// Rolling log directory; `None` leaves logging uninitialized.
    pub log_dir: Option<PathBuf>,
    pub tick_interval: Duration,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: LogLevel::build_default(),
            log_dir: None,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl WorkspaceConfig {
    /// Config persisting to `db_path`; a directory gets `DEFAULT_DB_FILE_NAME`.
    pub fn with_db_path(db_path: impl Into<PathBuf>) -> Self {
        let mut path = db_path.into();
        if path.is_dir() {
            path.push(DEFAULT_DB_FILE_NAME);
        }
        Self {
            db_path: Some(path),
            ..Self::default()
        }
    }

    /// Validates string inputs (FFI/CLI friendly) into a log target.
    ///
    /// # Errors
    /// - Unsupported `level`, empty or relative `log_dir`.
    pub fn log_to(mut self, level: &str, log_dir: &str) -> Result<Self, String> {
        self.log_level = level.parse()?;
        self.log_dir = Some(normalize_log_dir(log_dir)?);
        Ok(self)
    }

    pub fn tick_every(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(MIN_TICK_INTERVAL);
        self
    }

    /// Starts logging when a directory is configured.
    pub fn init_logging(&self) -> Result<(), String> {
        match &self.log_dir {
            Some(log_dir) => init_logging_with(self.log_level, log_dir),
            None => Ok(()),
        }
    }

    /// Opens the configured store with the wall clock.
    pub fn open_store(&self) -> StorageResult<WorkspaceStore<SqliteKeyValueStore>> {
        self.open_store_with_clock(Arc::new(SystemClock))
    }

    pub fn open_store_with_clock(
        &self,
        clock: Arc<dyn Clock>,
    ) -> StorageResult<WorkspaceStore<SqliteKeyValueStore>> {
        let kv = match &self.db_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
                }
                SqliteKeyValueStore::open(path)?
            }
            None => SqliteKeyValueStore::open_in_memory()?,
        };
        Ok(WorkspaceStore::open_with_clock(kv, clock))
    }

    pub fn open_session(&self) -> StorageResult<DashboardSession<SqliteKeyValueStore>> {
        Ok(DashboardSession::new(self.open_store()?))
    }
}
