//! Custom logging module.
//!
//! Stdout belongs to the frame writer while the application is running, so
//! log output goes to a file instead. The logger is only installed when the
//! `RETROCLOCK_LOG` environment variable names a target path; otherwise all
//! log macros stay disabled.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

/// Environment variable naming the log file path.
///
const LOG_PATH_VAR: &str = "RETROCLOCK_LOG";

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that appends formatted records to a file.
///
struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // If the lock or the write fails, the record is dropped;
            // logging is non-critical.
            if let Ok(mut file) = self.file.lock() {
                let _ = writeln!(file, "{}", format_log(record));
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Install the file logger if `RETROCLOCK_LOG` is set. Without the variable
/// this is a no-op and the `log` macros compile down to disabled checks.
///
pub fn init() -> AppResult<()> {
    let path = match std::env::var(LOG_PATH_VAR) {
        Ok(path) if !path.is_empty() => path,
        _ => return Ok(()),
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
    }))
    .map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_includes_level_and_message() {
        let record = Record::builder()
            .args(format_args!("frame emitted"))
            .level(Level::Info)
            .build();
        let formatted = format_log(&record);
        assert!(formatted.contains("INFO"));
        assert!(formatted.contains("frame emitted"));
    }

    #[test]
    fn test_format_log_levels() {
        for (level, label) in [
            (Level::Error, "ERROR"),
            (Level::Warn, "WARN"),
            (Level::Debug, "DEBUG"),
            (Level::Trace, "TRACE"),
        ] {
            let record = Record::builder()
                .args(format_args!("x"))
                .level(level)
                .build();
            assert!(format_log(&record).contains(label));
        }
    }
}
