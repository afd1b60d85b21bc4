#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `FLEET_SHEETS_LOG`, or `info` when unset or invalid.
pub fn level_from_env() -> LevelFilter {
    env::var("FLEET_SHEETS_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging with the level taken from `FLEET_SHEETS_LOG`.
pub fn init_logging() {
    let level = level_from_env();
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
