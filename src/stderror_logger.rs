// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::logger::Logger;
use std::io::Write;

/**
A reference logger that logs to stderr.

Write failures are dropped; a logger has nowhere to report them.
 */
#[derive(Debug, Clone)]
pub struct StdErrorLogger {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Clone: derived, zero-sized
// - Copy/PartialEq/Eq/Hash: all instances are equivalent
// - Default: convenient zero-argument constructor
// - Display: NOT implemented, no meaningful representation

impl Copy for StdErrorLogger {}

impl PartialEq for StdErrorLogger {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StdErrorLogger {}

impl std::hash::Hash for StdErrorLogger {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for StdErrorLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl StdErrorLogger {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Logger for StdErrorLogger {
    fn finish_log_record(&self, record: LogRecord) {
        let mut lock = std::io::stderr().lock();
        let _ = writeln!(lock, "{}", record);
    }

    fn prepare_to_die(&self) {
        let _ = std::io::stderr().lock().flush();
    }
}
