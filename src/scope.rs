// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named, severity-leveled logging scopes.
//!
//! A [`Scope`] is a named channel of log output with its own output level.  Records that
//! pass the level are dispatched to every global [`Logger`](crate::Logger).  Scopes are
//! registered once by name; registering a name again returns the same scope, so every
//! component that asks for `"klog"` shares one output level.
//!
//! ```rust
//! use scopewise::{kv, register_scope, find_scope, Level};
//!
//! let scope = register_scope("scope-doc", "example scope").unwrap();
//! scope.set_output_level(Level::Debug);
//! assert!(find_scope("scope-doc").unwrap().debug_enabled());
//!
//! let labeled = scope.with_labels(&kv!["request", 17]);
//! labeled.info("handled", &kv!["status", 200]);
//! ```
//!
//! # Labels
//!
//! [`Scope::with_labels`] derives a scope carrying extra key/value context.  The derived
//! scope shares its parent's output level: reconfiguring either one affects both.

use crate::adapter::{VerbosityAdapter, new_verbosity_adapter};
use crate::config::ConfigError;
use crate::global_logger::global_loggers;
use crate::level::Level;
use crate::log_record::LogRecord;
use crate::severity::SeverityScope;
use crate::value::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Name of the scope returned by [default_scope].
pub const DEFAULT_SCOPE_NAME: &str = "default";

const LABEL_ERROR_KEY: &str = "WithLabels error";

#[derive(Debug)]
struct ScopeInner {
    name: String,
    description: String,
    output_level: AtomicU8,
}

/**
A named logging scope.

Cheap to clone: clones and label-derived scopes share the name and output level.
*/
#[derive(Debug, Clone)]
pub struct Scope {
    inner: Arc<ScopeInner>,
    labels: Arc<Vec<(String, Value)>>,
}

impl Scope {
    fn new_unregistered(name: &str, description: &str) -> Self {
        Scope {
            inner: Arc::new(ScopeInner {
                name: name.to_string(),
                description: description.to_string(),
                output_level: AtomicU8::new(Level::Info.to_u8()),
            }),
            labels: Arc::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn description(&self) -> &str {
        &self.inner.description
    }

    pub fn output_level(&self) -> Level {
        Level::from_u8(self.inner.output_level.load(Ordering::Relaxed))
    }

    /// Changes the output level of this scope and of every scope sharing it.
    pub fn set_output_level(&self, level: Level) {
        self.inner
            .output_level
            .store(level.to_u8(), Ordering::Relaxed);
    }

    pub fn labels(&self) -> &[(String, Value)] {
        &self.labels
    }

    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.output_level())
    }

    pub fn debug_enabled(&self) -> bool {
        self.enabled(Level::Debug)
    }

    pub fn info_enabled(&self) -> bool {
        self.enabled(Level::Info)
    }

    pub fn warn_enabled(&self) -> bool {
        self.enabled(Level::Warn)
    }

    pub fn error_enabled(&self) -> bool {
        self.enabled(Level::Error)
    }

    /**
    Emits `message` at `level` if the output level allows it.

    `fields` are the call-site key/value sequence.  They are paired only when rendered.
    */
    pub fn log(&self, level: Level, message: &str, fields: &[Value]) {
        if !self.enabled(level) {
            return;
        }
        let record = LogRecord::new(level, self.name(), message)
            .with_labels(self.labels.as_ref().clone())
            .with_fields(fields.to_vec());
        let loggers = global_loggers();
        if let Some((last, rest)) = loggers.split_last() {
            for logger in rest {
                logger.finish_log_record(record.clone());
            }
            last.finish_log_record(record);
        }
    }

    pub fn debug(&self, message: &str, fields: &[Value]) {
        self.log(Level::Debug, message, fields)
    }

    pub fn info(&self, message: &str, fields: &[Value]) {
        self.log(Level::Info, message, fields)
    }

    pub fn warn(&self, message: &str, fields: &[Value]) {
        self.log(Level::Warn, message, fields)
    }

    pub fn error(&self, message: &str, fields: &[Value]) {
        self.log(Level::Error, message, fields)
    }

    /**
    Returns a scope with `kvlist` appended to its labels.

    `kvlist` alternates string keys and values.  A repeated key keeps its original
    position and takes the new value.  An odd-length list, or a key that is not a string,
    stops processing and records a `WithLabels error` label describing the problem.
    */
    pub fn with_labels(&self, kvlist: &[Value]) -> Scope {
        let mut labels = self.labels.as_ref().clone();
        if kvlist.len() % 2 != 0 {
            set_label(
                &mut labels,
                LABEL_ERROR_KEY,
                Value::string(format!(
                    "even number of parameters required, got {}",
                    kvlist.len()
                )),
            );
        } else {
            for pair in kvlist.chunks_exact(2) {
                match pair[0].as_str() {
                    Some(key) => set_label(&mut labels, key, pair[1].clone()),
                    None => {
                        set_label(
                            &mut labels,
                            LABEL_ERROR_KEY,
                            Value::string(format!(
                                "label name {} must be a string, got {}",
                                pair[0],
                                pair[0].type_description()
                            )),
                        );
                        break;
                    }
                }
            }
        }
        Scope {
            inner: self.inner.clone(),
            labels: Arc::new(labels),
        }
    }

    /// A verbosity-leveled logger writing through this scope.
    pub fn verbosity_adapter(&self) -> VerbosityAdapter<Scope> {
        new_verbosity_adapter(self.clone())
    }
}

fn set_label(labels: &mut Vec<(String, Value)>, key: &str, value: Value) {
    match labels.iter_mut().find(|(k, _)| k.as_str() == key) {
        Some(slot) => slot.1 = value,
        None => labels.push((key.to_string(), value)),
    }
}

impl SeverityScope for Scope {
    fn debug_enabled(&self) -> bool {
        Scope::debug_enabled(self)
    }
    fn info_enabled(&self) -> bool {
        Scope::info_enabled(self)
    }
    fn error_enabled(&self) -> bool {
        Scope::error_enabled(self)
    }
    fn debug(&self, message: &str, fields: &[Value]) {
        Scope::debug(self, message, fields)
    }
    fn info(&self, message: &str, fields: &[Value]) {
        Scope::info(self, message, fields)
    }
    fn error(&self, message: &str, fields: &[Value]) {
        Scope::error(self, message, fields)
    }
    fn with_labels(&self, labels: &[Value]) -> Self {
        Scope::with_labels(self, labels)
    }
}

/*
Boilerplate notes for Scope:

- Clone: derived, shares the inner Arc
- Debug: derived
- PartialEq/Eq/Hash: NOT implemented, labels hold arbitrary values
- Default: NOT implemented, use default_scope()
*/

// ============================================================================
// REGISTRY
// ============================================================================

static SCOPES: OnceLock<RwLock<BTreeMap<String, Scope>>> = OnceLock::new();

fn registry() -> &'static RwLock<BTreeMap<String, Scope>> {
    SCOPES.get_or_init(|| {
        let mut scopes = BTreeMap::new();
        scopes.insert(
            DEFAULT_SCOPE_NAME.to_string(),
            Scope::new_unregistered(DEFAULT_SCOPE_NAME, "Unscoped logging messages."),
        );
        RwLock::new(scopes)
    })
}

pub(crate) fn validate_name(name: &str) -> Result<(), ConfigError> {
    let valid = !name.is_empty()
        && !name.contains([':', ',', '.'])
        && !name.chars().any(|c| c.is_uppercase() || c.is_whitespace());
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidScopeName(name.to_string()))
    }
}

/**
Registers a scope, or returns the one already registered under `name`.

Names must be non-empty lowercase and may not contain `:`, `,`, `.` or whitespace.
The description of an existing scope is kept.
*/
pub fn register_scope(name: &str, description: &str) -> Result<Scope, ConfigError> {
    validate_name(name)?;
    if let Some(scope) = find_scope(name) {
        return Ok(scope);
    }
    let mut scopes = registry().write().unwrap_or_else(PoisonError::into_inner);
    let scope = scopes
        .entry(name.to_string())
        .or_insert_with(|| Scope::new_unregistered(name, description));
    Ok(scope.clone())
}

/// The registered scope named `name`, without labels.
pub fn find_scope(name: &str) -> Option<Scope> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
}

/// All registered scopes, sorted by name.
pub fn scopes() -> Vec<Scope> {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .values()
        .cloned()
        .collect()
}

/// The scope for messages that belong to no particular component.
pub fn default_scope() -> Scope {
    find_scope(DEFAULT_SCOPE_NAME)
        .unwrap_or_else(|| Scope::new_unregistered(DEFAULT_SCOPE_NAME, ""))
}
