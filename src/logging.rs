//! Logger setup
//!
//! The search screen owns the terminal, so it logs to a file. One-shot
//! commands log to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;

use env_logger::{Builder, Target};

/// Environment variable holding the log filter, e.g. `airbook=debug`
pub const LOG_ENV: &str = "AIRBOOK_LOG";
const DEFAULT_FILTER: &str = "warn";
const LOG_FILE: &str = "airbook.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

fn filter() -> String {
    std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// Install the global logger; a second call is a no-op
pub fn init(target: LogTarget) {
    let mut builder = Builder::new();
    builder.parse_filters(&filter());

    match target {
        LogTarget::File(path) => {
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => {
                    builder.target(Target::Pipe(Box::new(file)));
                }
                Err(e) => {
                    // Nowhere to log without corrupting the screen
                    eprintln!("airbook: cannot open log file {}: {e}", path.display());
                    builder.filter_level(log::LevelFilter::Off);
                }
            }
        }
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
    }

    let _ = builder.try_init();
}
