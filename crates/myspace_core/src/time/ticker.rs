//! Cancellable repeating clock refresh.
//!
//! # Invariants
//! - The callback never runs after `cancel()` returns or the ticker is dropped.
//! - The ticker shares nothing with the record stores except the `Clock`.

use super::format::ClockReading;
use super::Clock;
use log::{debug, info};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Nominal refresh interval of the date/time widget.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that publishes a `ClockReading` every interval.
pub struct ClockTicker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    /// Starts ticking: once immediately, then every `interval`.
    ///
    /// # Errors
    /// - Returns the OS error when the worker thread cannot be spawned.
    pub fn start<F>(
        clock: Arc<dyn Clock>,
        interval: Duration,
        mut on_tick: F,
    ) -> std::io::Result<Self>
    where
        F: FnMut(ClockReading) + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("myspace-clock".to_string())
            .spawn(move || loop {
                on_tick(ClockReading::at(clock.now()));
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        info!(
            "event=clock_ticker module=time status=start interval_ms={}",
            interval.as_millis()
        );
        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stops the task and waits for the worker to exit. Idempotent.
    pub fn cancel(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if handle.join().is_err() {
            debug!("event=clock_ticker module=time status=error error_code=worker_panicked");
        }
        info!("event=clock_ticker module=time status=stopped");
    }
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
