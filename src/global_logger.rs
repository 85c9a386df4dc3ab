// SPDX-License-Identifier: MIT OR Apache-2.0

//! Global logger management.
//!
//! Every [`Scope`](crate::Scope) dispatches the records it emits to the same process-wide
//! collection of [`Logger`]s.  The collection starts out holding a single
//! [`StdErrorLogger`], so output works without configuration.
//!
//! # Examples
//!
//! ```
//! use scopewise::global_loggers;
//!
//! // Initializes with StdErrorLogger if needed
//! let loggers = global_loggers();
//! assert!(!loggers.is_empty());
//! ```
//!
//! ```
//! use scopewise::{set_global_loggers, InMemoryLogger};
//! use std::sync::Arc;
//!
//! // Replace all loggers with just an in-memory logger
//! let logger = Arc::new(InMemoryLogger::new());
//! set_global_loggers(vec![logger.clone()]);
//! scopewise::default_scope().warn("only captured in memory", &[]);
//! assert!(logger.drain_logs().contains("only captured in memory"));
//! ```
//!
//! # Logger Lifecycle
//!
//! Loggers are reference-counted.  A logger removed by [`set_global_loggers`] lives
//! until in-flight dispatches holding a clone of the collection drop it.

use crate::logger::Logger;
use crate::stderror_logger::StdErrorLogger;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static GLOBAL_LOGGERS: OnceLock<RwLock<Vec<Arc<dyn Logger>>>> = OnceLock::new();

fn loggers_lock() -> &'static RwLock<Vec<Arc<dyn Logger>>> {
    GLOBAL_LOGGERS.get_or_init(|| RwLock::new(vec![Arc::new(StdErrorLogger::new())]))
}

/// Retrieves the current set of global loggers.
///
/// The lock is held only while the `Arc`s are cloned, so loggers are called without it.
pub fn global_loggers() -> Vec<Arc<dyn Logger>> {
    loggers_lock()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Adds a logger to the global logger collection.
pub fn add_global_logger(logger: Arc<dyn Logger>) {
    loggers_lock()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(logger);
}

/// Replaces all global loggers with a new set.
///
/// An empty set silently drops every record.
pub fn set_global_loggers(new_loggers: Vec<Arc<dyn Logger>>) {
    *loggers_lock()
        .write()
        .unwrap_or_else(PoisonError::into_inner) = new_loggers;
}

/**
Flushes every global logger.

Call before the process exits.
*/
pub fn sync() {
    for logger in global_loggers() {
        logger.prepare_to_die();
    }
}
