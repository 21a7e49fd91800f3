//! Command-line arguments for the smoke CLI.

use clap::Parser;
use myspace_core::WorkspaceConfig;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "myspace_cli", version, about = "Smoke check for the MySpace core")]
pub struct CliArgs {
    /// SQLite file or directory; omitted keeps the workspace in memory.
    pub db_path: Option<PathBuf>,
    /// Run the clock ticker for this many seconds before exiting.
    #[arg(long, value_name = "SECS")]
    pub clock: Option<u64>,
    /// Clock tick interval in milliseconds (never below 100).
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,
    /// Absolute directory for rolling log files.
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<String>,
    /// trace|debug|info|warn|error
    #[arg(long = "log-level", value_name = "LEVEL", requires = "log_dir")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Folds the flags into a workspace config.
    ///
    /// # Errors
    /// - Unsupported log level or a relative log directory.
    pub fn to_config(&self) -> Result<WorkspaceConfig, String> {
        let mut config = match &self.db_path {
            Some(path) => WorkspaceConfig::with_db_path(path),
            None => WorkspaceConfig::default(),
        };
        if let Some(log_dir) = &self.log_dir {
            let level = self
                .log_level
                .clone()
                .unwrap_or_else(|| config.log_level.as_str().to_string());
            config = config.log_to(&level, log_dir)?;
        }
        if let Some(ms) = self.tick_ms {
            config = config.tick_every(Duration::from_millis(ms));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::error::ErrorKind;
    use clap::Parser;
    use myspace_core::{LogLevel, MIN_TICK_INTERVAL};
    use std::path::PathBuf;

    #[test]
    fn help_is_not_taken_as_a_db_path() {
        let err = CliArgs::try_parse_from(["myspace_cli", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flags_and_bad_numbers_are_rejected() {
        assert!(CliArgs::try_parse_from(["myspace_cli", "--bogus"]).is_err());
        assert!(CliArgs::try_parse_from(["myspace_cli", "--clock", "abc"]).is_err());
        assert!(CliArgs::try_parse_from(["myspace_cli", "--log-level", "info"]).is_err());
    }

    #[test]
    fn flags_fold_into_config() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let args = CliArgs::try_parse_from([
            "myspace_cli",
            "data.sqlite3",
            "--clock",
            "2",
            "--tick-ms",
            "5",
            "--log-dir",
            log_dir.to_str().unwrap(),
            "--log-level",
            "warn",
        ])
        .unwrap();
        assert_eq!(args.clock, Some(2));

        let config = args.to_config().unwrap();
        assert_eq!(config.db_path, Some(PathBuf::from("data.sqlite3")));
        assert_eq!(config.tick_interval, MIN_TICK_INTERVAL);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.log_dir, Some(log_dir));
    }

    #[test]
    fn relative_log_dir_fails_config() {
        let args = CliArgs::try_parse_from(["myspace_cli", "--log-dir", "logs"]).unwrap();
        assert!(args.to_config().is_err());
    }
}
