// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routes verbosity-leveled logging through a severity-leveled scope.
//!
//! Verbosity levels `0..=3` are treated as info and `4+` as debug; there are no
//! warnings.  Errors pass through as errors whatever the verbosity.  Because output goes
//! through the scope, the scope's output level controls what third-party verbosity
//! logging actually prints.
//!
//! ```rust
//! use scopewise::{kv, register_scope, Level, VerbosityLogger};
//!
//! let scope = register_scope("adapter-doc", "third-party output").unwrap();
//! scope.set_output_level(Level::Info);
//!
//! let logger = scope.verbosity_adapter();
//! assert!(logger.enabled());
//! assert!(logger.v(3).enabled());
//! assert!(!logger.v(4).enabled());
//!
//! logger.with_values(&kv!["node", "n1"]).info("synced\n", &[]);
//! ```

use crate::severity::SeverityScope;
use crate::value::Value;
use crate::verbosity::VerbosityLogger;
use std::error::Error;

/// Offsets above this map to debug; at or below, to info.
pub const DEBUG_VERBOSITY_THRESHOLD: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Debug,
    Info,
}

/**
A [VerbosityLogger] over a [SeverityScope].

Immutable: every derived handle is a new value.  `offset` is `None` until the first
[VerbosityLogger::v] call; a handle with no offset always maps to info, even though its
nominal verbosity is zero.
*/
#[derive(Debug, Clone)]
pub struct VerbosityAdapter<S> {
    scope: S,
    offset: Option<i32>,
}

/// Wraps `scope` in a fresh adapter with no verbosity offset.
pub fn new_verbosity_adapter<S: SeverityScope>(scope: S) -> VerbosityAdapter<S> {
    VerbosityAdapter {
        scope,
        offset: None,
    }
}

impl<S: SeverityScope> VerbosityAdapter<S> {
    /// The accumulated offset, or `None` if [VerbosityLogger::v] was never called.
    pub fn offset(&self) -> Option<i32> {
        self.offset
    }

    /// The scope this adapter writes through.
    pub fn scope(&self) -> &S {
        &self.scope
    }

    fn tier(&self) -> Tier {
        match self.offset {
            Some(offset) if offset > DEBUG_VERBOSITY_THRESHOLD => Tier::Debug,
            _ => Tier::Info,
        }
    }
}

/**
Strips exactly one trailing line feed.

Callers tend to terminate messages themselves but scopes terminate lines too.
*/
pub fn trim_newline(message: &str) -> &str {
    message.strip_suffix('\n').unwrap_or(message)
}

impl<S: SeverityScope> VerbosityLogger for VerbosityAdapter<S> {
    fn enabled(&self) -> bool {
        match self.tier() {
            Tier::Debug => self.scope.debug_enabled(),
            Tier::Info => self.scope.info_enabled(),
        }
    }

    fn info(&self, message: &str, keys_and_values: &[Value]) {
        // filtering belongs to the scope
        match self.tier() {
            Tier::Debug => self.scope.debug(trim_newline(message), keys_and_values),
            Tier::Info => self.scope.info(trim_newline(message), keys_and_values),
        }
    }

    fn error(&self, err: Option<&dyn Error>, message: &str, keys_and_values: &[Value]) {
        if !self.scope.error_enabled() {
            return;
        }
        match err {
            None => self.scope.error(trim_newline(message), keys_and_values),
            Some(err) => {
                let composed = format!("{}: {}", err, trim_newline(message));
                self.scope.error(&composed, keys_and_values)
            }
        }
    }

    fn v(&self, level: i32) -> Self {
        VerbosityAdapter {
            scope: self.scope.clone(),
            offset: Some(self.offset.unwrap_or(0).saturating_add(level)),
        }
    }

    fn with_values(&self, keys_and_values: &[Value]) -> Self {
        new_verbosity_adapter(self.scope.with_labels(keys_and_values))
    }

    fn with_name(&self, _name: &str) -> Self {
        // scopes have no name segments
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv;
    use std::fmt;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Debug(String, usize),
        Info(String, usize),
        Error(String, usize),
    }

    #[derive(Debug, Default)]
    struct Recorder {
        debug_enabled: AtomicBool,
        info_enabled: AtomicBool,
        error_enabled: AtomicBool,
        calls: Mutex<Vec<Call>>,
        last_fields: Mutex<Vec<Value>>,
        label_calls: AtomicUsize,
    }

    /// A scope that records what reaches it.  `id` distinguishes derived scopes.
    #[derive(Debug, Clone)]
    struct RecordingScope {
        id: usize,
        state: Arc<Recorder>,
        derived: Arc<Mutex<Vec<RecordingScope>>>,
    }

    impl RecordingScope {
        fn new(debug: bool, info: bool, error: bool) -> Self {
            let state = Recorder::default();
            state.debug_enabled.store(debug, Ordering::SeqCst);
            state.info_enabled.store(info, Ordering::SeqCst);
            state.error_enabled.store(error, Ordering::SeqCst);
            RecordingScope {
                id: 0,
                state: Arc::new(state),
                derived: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.state.calls.lock().unwrap().clone()
        }

        fn last_fields(&self) -> Vec<Value> {
            self.state.last_fields.lock().unwrap().clone()
        }

        fn record(&self, call: Call, fields: &[Value]) {
            self.state.calls.lock().unwrap().push(call);
            *self.state.last_fields.lock().unwrap() = fields.to_vec();
        }
    }

    impl SeverityScope for RecordingScope {
        fn debug_enabled(&self) -> bool {
            self.state.debug_enabled.load(Ordering::SeqCst)
        }
        fn info_enabled(&self) -> bool {
            self.state.info_enabled.load(Ordering::SeqCst)
        }
        fn error_enabled(&self) -> bool {
            self.state.error_enabled.load(Ordering::SeqCst)
        }
        fn debug(&self, message: &str, fields: &[Value]) {
            if self.debug_enabled() {
                self.record(Call::Debug(message.to_string(), fields.len()), fields);
            }
        }
        fn info(&self, message: &str, fields: &[Value]) {
            if self.info_enabled() {
                self.record(Call::Info(message.to_string(), fields.len()), fields);
            }
        }
        fn error(&self, message: &str, fields: &[Value]) {
            self.record(Call::Error(message.to_string(), fields.len()), fields);
        }
        fn with_labels(&self, labels: &[Value]) -> Self {
            self.state.label_calls.fetch_add(1, Ordering::SeqCst);
            let child = RecordingScope {
                id: self.id + 1,
                state: Arc::new(Recorder::default()),
                derived: Arc::new(Mutex::new(Vec::new())),
            };
            child
                .state
                .info_enabled
                .store(self.info_enabled(), Ordering::SeqCst);
            child
                .state
                .debug_enabled
                .store(self.debug_enabled(), Ordering::SeqCst);
            child
                .state
                .error_enabled
                .store(self.error_enabled(), Ordering::SeqCst);
            *child.state.last_fields.lock().unwrap() = labels.to_vec();
            self.derived.lock().unwrap().push(child.clone());
            child
        }
    }

    #[derive(Debug)]
    struct Oops;

    impl fmt::Display for Oops {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("oops")
        }
    }

    impl Error for Oops {}

    #[test]
    fn trim_newline_strips_exactly_one() {
        assert_eq!(trim_newline(""), "");
        assert_eq!(trim_newline("x"), "x");
        assert_eq!(trim_newline("x\n"), "x");
        assert_eq!(trim_newline("x\n\n"), "x\n");
        assert_eq!(trim_newline("\n"), "");
        assert_eq!(trim_newline("x\r\n"), "x\r");
    }

    #[test]
    fn unset_offset_follows_info_enablement() {
        let scope = RecordingScope::new(false, true, true);
        let logger = new_verbosity_adapter(scope.clone());
        assert_eq!(logger.offset(), None);
        assert!(logger.enabled());

        let scope = RecordingScope::new(true, false, true);
        assert!(!new_verbosity_adapter(scope).enabled());
    }

    #[test]
    fn threshold_boundary() {
        let scope = RecordingScope::new(true, false, true);
        let logger = new_verbosity_adapter(scope);
        assert!(!logger.v(0).enabled());
        assert!(!logger.v(3).enabled());
        assert!(logger.v(4).enabled());
        assert!(logger.v(10).enabled());
        assert!(!logger.v(-5).enabled());
    }

    #[test]
    fn enabled_reads_live_configuration() {
        let scope = RecordingScope::new(false, true, true);
        let logger = new_verbosity_adapter(scope.clone()).v(4);
        assert!(!logger.enabled());
        scope.state.debug_enabled.store(true, Ordering::SeqCst);
        assert!(logger.enabled());
    }

    #[test]
    fn v_accumulates_offsets() {
        let logger = new_verbosity_adapter(RecordingScope::new(true, true, true));
        assert_eq!(logger.v(2).v(3).offset(), Some(5));
        assert_eq!(logger.v(0).offset(), Some(0));
        assert_eq!(logger.v(6).v(-4).offset(), Some(2));
        assert_eq!(logger.v(-1).v(-2).offset(), Some(-3));
        assert_eq!(logger.v(i32::MAX).v(1).offset(), Some(i32::MAX));
        // receiver is untouched
        assert_eq!(logger.offset(), None);
    }

    #[test]
    fn chained_offsets_cross_threshold() {
        let scope = RecordingScope::new(true, true, true);
        let logger = new_verbosity_adapter(scope.clone());
        logger.v(2).v(2).info("detail", &[]);
        logger.v(2).v(1).info("summary", &[]);
        assert_eq!(
            scope.calls(),
            vec![
                Call::Debug("detail".to_string(), 0),
                Call::Info("summary".to_string(), 0)
            ]
        );
    }

    #[test]
    fn info_without_offset_forwards_trimmed_message_once() {
        let scope = RecordingScope::new(false, true, true);
        new_verbosity_adapter(scope.clone()).info("hello\n", &[]);
        assert_eq!(scope.calls(), vec![Call::Info("hello".to_string(), 0)]);
    }

    #[test]
    fn debug_tier_info_is_dropped_when_debug_disabled() {
        let scope = RecordingScope::new(false, true, true);
        new_verbosity_adapter(scope.clone()).v(4).info("hello\n", &[]);
        assert!(scope.calls().is_empty());
    }

    #[test]
    fn info_passes_fields_through_unmodified() {
        let scope = RecordingScope::new(true, true, true);
        let payload = Value::new(vec![1, 2, 3]);
        let fields = kv!["a", &payload, "b"];
        new_verbosity_adapter(scope.clone()).info("m", &fields);
        let seen = scope.last_fields();
        assert_eq!(seen.len(), 3);
        for (seen, sent) in seen.iter().zip(&fields) {
            assert!(seen.ptr_eq(sent));
        }

        new_verbosity_adapter(scope.clone()).v(5).info("d", &fields);
        assert_eq!(scope.calls()[1], Call::Debug("d".to_string(), 3));
        assert!(scope.last_fields()[1].ptr_eq(&payload));
    }

    #[test]
    fn error_without_err_forwards_message() {
        let scope = RecordingScope::new(false, false, true);
        new_verbosity_adapter(scope.clone()).error(None, "msg\n", &kv!["k", "v"]);
        assert_eq!(scope.calls(), vec![Call::Error("msg".to_string(), 2)]);
    }

    #[test]
    fn error_with_err_prefixes_description() {
        let scope = RecordingScope::new(false, false, true);
        new_verbosity_adapter(scope.clone()).error(Some(&Oops), "msg\n", &[]);
        assert_eq!(scope.calls(), vec![Call::Error("oops: msg".to_string(), 0)]);
    }

    #[test]
    fn error_is_gated_on_error_enablement() {
        let scope = RecordingScope::new(true, true, false);
        let logger = new_verbosity_adapter(scope.clone());
        logger.error(None, "msg", &[]);
        logger.error(Some(&Oops), "msg", &[]);
        assert!(scope.calls().is_empty());
    }

    #[test]
    fn error_ignores_verbosity() {
        let scope = RecordingScope::new(false, false, true);
        new_verbosity_adapter(scope.clone()).v(9).error(None, "deep", &[]);
        assert_eq!(scope.calls(), vec![Call::Error("deep".to_string(), 0)]);
    }

    #[test]
    fn with_values_labels_a_derived_scope() {
        let scope = RecordingScope::new(false, true, true);
        let logger = new_verbosity_adapter(scope.clone()).with_values(&kv!["k", "v"]);
        logger.info("m", &[]);

        assert_eq!(scope.state.label_calls.load(Ordering::SeqCst), 1);
        assert!(scope.calls().is_empty());
        let derived = scope.derived.lock().unwrap().clone();
        assert_eq!(derived.len(), 1);
        assert_eq!(logger.scope().id, 1);
        let writes = derived[0].state.calls.lock().unwrap().clone();
        assert_eq!(writes, vec![Call::Info("m".to_string(), 0)]);
    }

    #[test]
    fn with_values_resets_offset() {
        let scope = RecordingScope::new(true, true, true);
        let logger = new_verbosity_adapter(scope).v(7).with_values(&kv!["k", "v"]);
        assert_eq!(logger.offset(), None);
        logger.info("m", &[]);
        let derived = logger.scope().calls();
        assert_eq!(derived, vec![Call::Info("m".to_string(), 0)]);
    }

    #[test]
    fn with_name_returns_equivalent_handle() {
        let scope = RecordingScope::new(true, true, true);
        let logger = new_verbosity_adapter(scope.clone()).v(5);
        let named = logger.with_name("controller");
        assert_eq!(named.offset(), Some(5));
        assert!(Arc::ptr_eq(&named.scope().state, &scope.state));
    }

    #[test]
    fn concurrent_derivation_and_logging() {
        let scope = RecordingScope::new(true, true, true);
        let logger = new_verbosity_adapter(scope.clone());
        std::thread::scope(|s| {
            for i in 0..8 {
                let logger = &logger;
                s.spawn(move || logger.v(i).info("tick", &[]));
            }
        });
        let calls = scope.calls();
        assert_eq!(calls.len(), 8);
        let debug = calls
            .iter()
            .filter(|c| matches!(c, Call::Debug(..)))
            .count();
        assert_eq!(debug, 4);
    }
}
