//! Time sources and display formatting.
//!
//! # Responsibility
//! - Abstract "now" behind `Clock` so formatting and stores are testable.
//! - Render relative ages, log timestamps and the live clock readout.
//! - Drive the once-per-second clock refresh as a cancellable task.
//!
//! # Invariants
//! - Calendar-day comparisons and absolute renderings use the fixed
//!   reference zone (IST, UTC+05:30), never the host's local zone.

pub mod format;
pub mod ticker;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::sync::Mutex;

/// India Standard Time offset; IST observes no daylight saving.
pub const REFERENCE_UTC_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// Fixed zone used by every formatter in this module.
pub fn reference_zone() -> FixedOffset {
    FixedOffset::east_opt(REFERENCE_UTC_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

/// Provides the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for tests and deterministic rendering.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = now;
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
