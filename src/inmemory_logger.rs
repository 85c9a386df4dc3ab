// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Logger
//!
//! An in-memory logger that captures records instead of writing them anywhere, for
//! tests and for programmatically examining output.
//!
//! The logger implements [`Logger`] and is installed with
//! [`add_global_logger`](crate::add_global_logger) or
//! [`set_global_loggers`](crate::set_global_loggers) like any other logger.

use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An in-memory logger that stores every record it receives.
///
/// # Example
///
/// ```rust
/// use scopewise::{kv, register_scope, InMemoryLogger, add_global_logger};
/// use std::sync::Arc;
///
/// let logger = Arc::new(InMemoryLogger::new());
/// add_global_logger(logger.clone());
///
/// let scope = register_scope("inmemory-doc", "doc example").unwrap();
/// scope.info("Test message", &kv!["value", 42]);
///
/// let logs = logger.drain_logs();
/// assert!(logs.contains("Test message value=42"));
/// ```
///
/// # Test Isolation Pattern
///
/// Save and restore the global loggers around a test:
///
/// ```rust
/// use scopewise::{global_loggers, set_global_loggers, InMemoryLogger};
/// use std::sync::Arc;
///
/// let original_loggers = global_loggers();
/// let test_logger = Arc::new(InMemoryLogger::new());
/// set_global_loggers(vec![test_logger.clone()]);
///
/// scopewise::default_scope().error("Test-specific log message", &[]);
/// assert!(test_logger.drain_logs().contains("Test-specific log message"));
///
/// set_global_loggers(original_loggers);
/// ```
#[derive(Debug)]
pub struct InMemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived, required by Logger
// - Default: empty buffer
// - Clone: NOT implemented, share through Arc instead
// - PartialEq/Eq/Hash: NOT implemented, equality of loggers is unclear

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogger {
    /// Creates a new `InMemoryLogger` with an empty buffer.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drains all logs into a single string, clearing the internal buffer.
    ///
    /// Records are rendered with their `Display` impl and joined with newlines.
    pub fn drain_logs(&self) -> String {
        let mut records = self.lock();
        let result = records
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        records.clear();
        result
    }

    /// Takes the captured records, clearing the internal buffer.
    pub fn drain_records(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.lock())
    }
}

impl Logger for InMemoryLogger {
    fn finish_log_record(&self, record: LogRecord) {
        self.lock().push(record);
    }

    fn prepare_to_die(&self) {
        // nothing is buffered outside the vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn drain_logs_joins_and_clears() {
        let logger = InMemoryLogger::new();
        logger.finish_log_record(LogRecord::new(Level::Info, "a", "first"));
        logger.finish_log_record(LogRecord::new(Level::Warn, "b", "second"));

        let logs = logger.drain_logs();
        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("info\ta\tfirst"));
        assert!(lines[1].ends_with("warn\tb\tsecond"));
        assert_eq!(logger.drain_logs(), "");
    }

    #[test]
    fn drain_records_keeps_structure() {
        let logger = InMemoryLogger::new();
        logger.finish_log_record(LogRecord::new(Level::Debug, "a", "msg"));
        let records = logger.drain_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level(), Level::Debug);
        assert!(logger.drain_records().is_empty());
    }
}
