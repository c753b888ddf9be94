//! Append-only run log under the user's cache directory.
//!
//! Nothing is written until `init_logging` has picked a file, so library code
//! can log unconditionally.

use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};

lazy_static::lazy_static! {
    static ref LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Error,
    Info,
    Debug,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }
}

/// Log file for a run started at `started` inside `log_dir`.
fn run_log_path(log_dir: &Path, started: DateTime<Local>) -> PathBuf {
    log_dir.join(format!("issue-{}.log", started.format("%Y%m%d-%H%M%S")))
}

fn format_line(level: Level, at: DateTime<Local>, message: &str) -> String {
    format!("[{}] {} - {}", at.format("%Y-%m-%d %H:%M:%S%.3f"), level.as_str(), message)
}

pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("issue-cli")
        .join("logs");
    create_dir_all(&log_dir)?;

    let log_file = run_log_path(&log_dir, Local::now());
    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(log_file.clone());
    }

    log_info(&format!("issue {} logging to {}", env!("CARGO_PKG_VERSION"), log_file.display()));
    Ok(())
}

pub fn log_error(message: &str) {
    write_line(Level::Error, message);
}

pub fn log_info(message: &str) {
    write_line(Level::Info, message);
}

pub fn log_debug(message: &str) {
    write_line(Level::Debug, message);
}

/// One-line summary of a panic: location and payload.
#[allow(deprecated)]
fn describe_panic(info: &std::panic::PanicInfo) -> String {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string payload".to_string());

    match info.location() {
        Some(at) => format!("issue panicked at {}:{}:{}: {}", at.file(), at.line(), at.column(), payload),
        None => format!("issue panicked: {}", payload),
    }
}

#[allow(deprecated)]
pub fn log_panic_info(info: &std::panic::PanicInfo) {
    log_error(&describe_panic(info));
    log_debug(&format!("backtrace:\n{}", std::backtrace::Backtrace::capture()));
}

fn write_line(level: Level, message: &str) {
    let path = match LOG_FILE.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => return,
    };
    let Some(path) = path else { return };

    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = writeln!(file, "{}", format_line(level, Local::now(), message));
    }
}
