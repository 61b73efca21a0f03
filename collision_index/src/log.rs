//! Logging for the collision index
//!
//! This module provides a pluggable logging system with:
//! - Customizable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - File and line information for ERROR logs
//!
//! The active logger is process-wide and installed through
//! `Engine::set_logger`. Library code logs through the `collision_*!` macros.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route collision logs elsewhere (a file, a game console,
/// a test buffer, ...).
///
/// # Example
///
/// ```no_run
/// use collision_index::collision::log::{Logger, LogEntry};
///
/// struct ConsoleOverlay;
///
/// impl Logger for ConsoleOverlay {
///     fn log(&self, entry: &LogEntry) {
///         // Push to the in-game console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g. "collision::Index", "collision::Culler")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-call details (neutral no-ops on stale handles, broad-phase moves)
    Trace,

    /// Registration, removal, culling passes
    Debug,

    /// Session lifecycle events
    Info,

    /// Recoverable oddities (clamped sizes, ...)
    Warn,

    /// Errors returned to the caller (with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used in console output
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry as a single uncolored line.
    pub fn format_plain(entry: &LogEntry) -> String {
        let timestamp = Self::format_timestamp(entry.timestamp);
        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, entry.severity.label(), entry.source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, entry.severity.label(), entry.source, entry.message
            ),
        }
    }

    /// Format timestamp as YYYY-MM-DD HH:MM:SS.mmm in local time
    fn format_timestamp(timestamp: SystemTime) -> String {
        let datetime: DateTime<Local> = timestamp.into();
        datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let timestamp = Self::format_timestamp(entry.timestamp);

        let label = entry.severity.label();
        let severity_str = match entry.severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (per-call details)
///
/// ```no_run
/// # use collision_index::collision_trace;
/// collision_trace!("collision::Index", "update_bounds on stale handle {}", 7);
/// ```
#[macro_export]
macro_rules! collision_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::collision::Engine::log(
            $crate::collision::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
///
/// ```no_run
/// # use collision_index::collision_debug;
/// collision_debug!("collision::Index", "Collider {} registered", 0);
/// ```
#[macro_export]
macro_rules! collision_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::collision::Engine::log(
            $crate::collision::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
///
/// ```no_run
/// # use collision_index::collision_info;
/// collision_info!("collision::Engine", "Collision index created");
/// ```
#[macro_export]
macro_rules! collision_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::collision::Engine::log(
            $crate::collision::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
///
/// ```no_run
/// # use collision_index::collision_warn;
/// collision_warn!("collision::Volume", "Negative size clamped to zero");
/// ```
#[macro_export]
macro_rules! collision_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::collision::Engine::log(
            $crate::collision::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// ```no_run
/// # use collision_index::collision_error;
/// collision_error!("collision::Engine", "Failed to create index: {}", "already exists");
/// ```
#[macro_export]
macro_rules! collision_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::collision::Engine::log_detailed(
            $crate::collision::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
