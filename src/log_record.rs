// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type for the scopewise logging system.
//!
//! A [`LogRecord`] is what a [`Scope`](crate::Scope) hands to every global
//! [`Logger`](crate::Logger) once a message has passed the scope's filter.  It keeps the
//! message and its structured context separate so sinks can choose their own layout; its
//! `Display` impl is the reference console layout.
//!
//! ```rust
//! use scopewise::{kv, Level, LogRecord};
//!
//! let record = LogRecord::new(Level::Warn, "klog", "slow sync")
//!     .with_fields(kv!["ms", 1200]);
//! assert!(record.to_string().ends_with("warn\tklog\tslow sync ms=1200"));
//! ```

use crate::Level;
use crate::value::Value;
use std::fmt::Display;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static INITIAL_TIMESTAMP: OnceLock<Instant> = OnceLock::new();

fn initial_timestamp() -> Instant {
    *INITIAL_TIMESTAMP.get_or_init(Instant::now)
}

/**
A single message emitted through a scope.

`labels` are the scope's persistent context, already paired.  `fields` are the
call-site key/value sequence exactly as the caller passed it.
*/
#[derive(Debug, Clone)]
pub struct LogRecord {
    level: Level,
    scope: String,
    message: String,
    labels: Vec<(String, Value)>,
    fields: Vec<Value>,
    elapsed: Duration,
}

impl LogRecord {
    pub fn new(level: Level, scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            scope: scope.into(),
            message: message.into(),
            labels: Vec::new(),
            fields: Vec::new(),
            elapsed: Instant::now().duration_since(initial_timestamp()),
        }
    }

    pub fn with_labels(mut self, labels: Vec<(String, Value)>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_fields(mut self, fields: Vec<Value>) -> Self {
        self.fields = fields;
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[(String, Value)] {
        &self.labels
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// Time since the first record of the process was created.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:?}] {}\t{}\t{}",
            self.elapsed, self.level, self.scope, self.message
        )?;
        for (key, value) in &self.labels {
            write!(f, " {}={}", key, value)?;
        }
        for pair in self.fields.chunks(2) {
            match pair {
                [key, value] => write!(f, " {}={}", key, value)?,
                [key] => write!(f, " {}=(MISSING)", key)?,
                _ => {}
            }
        }
        Ok(())
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug/Clone: derived, records are forwarded to several loggers
- Display: reference console layout

NOT IMPLEMENTED:
- PartialEq/Eq/Hash: Value has no equality
- Default: every record belongs to a scope
- Ord: no meaningful ordering
*/
