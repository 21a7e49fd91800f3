//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `myspace_core` linkage and print a workspace summary.
//! - Optionally run the clock ticker for a few seconds (`--clock <secs>`).

mod args;

use args::CliArgs;
use clap::Parser;
use myspace_core::{ClockTicker, SystemClock};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    println!("myspace_core ping={}", myspace_core::ping());
    println!("myspace_core version={}", myspace_core::core_version());

    let config = match args.to_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid arguments: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.init_logging() {
        eprintln!("failed to start logging: {err}");
        return ExitCode::FAILURE;
    }

    let session = match config.open_session() {
        Ok(session) => session,
        Err(err) => {
            eprintln!("failed to open workspace: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stats = session.stats();
    println!(
        "workspace {} | {} | {} | {} tasks",
        stats.notes_label(),
        stats.logs_label(),
        stats.pending_label(),
        stats.todos
    );

    if let Some(secs) = args.clock.filter(|secs| *secs > 0) {
        let ticker = ClockTicker::start(Arc::new(SystemClock), config.tick_interval, |reading| {
            println!("{} {}", reading.time, reading.date);
        });
        match ticker {
            Ok(mut ticker) => {
                std::thread::sleep(Duration::from_secs(secs));
                ticker.cancel();
            }
            Err(err) => {
                eprintln!("failed to start clock: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
