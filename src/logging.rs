#![cfg(feature = "std")]

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable holding the log level (`error` .. `trace`, or `off`).
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the game board
            eprintln!(
                "{} [{}] - {}",
                record.level(),
                record.module_path().unwrap_or("?"),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value`, or `default` when it is missing or not a level.
pub fn log_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(default)
}

/// Install the stderr logger. The level comes from [`LOG_ENV`], falling back
/// to `default`. Later calls only adjust the level.
pub fn init_logging(default: LevelFilter) {
    let var = env::var(LOG_ENV).ok();
    let level = log_level(var.as_deref(), default);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
