// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::value::Value;
use std::error::Error;

/**
A verbosity-leveled logger.

Messages carry no severity.  Instead a handle is derived with [VerbosityLogger::v], where
`0` is the most important and larger numbers add detail.  Levels compose: `v(2).v(3)`
logs at verbosity 5.

Code written against this trait, typically third-party code, does not need to know what
the messages are routed to.
*/
pub trait VerbosityLogger: Sized + Send + Sync {
    /// Whether an [VerbosityLogger::info] call on this handle would currently be emitted.
    fn enabled(&self) -> bool;

    fn info(&self, message: &str, keys_and_values: &[Value]);

    /**
    Logs an error.  `err` may be absent when the condition has no error value.
    Errors are not affected by verbosity.
    */
    fn error(&self, err: Option<&dyn Error>, message: &str, keys_and_values: &[Value]);

    /// A handle whose messages are `level` steps more verbose than this one's.
    fn v(&self, level: i32) -> Self;

    /// A handle that attaches `keys_and_values` to everything it logs.
    fn with_values(&self, keys_and_values: &[Value]) -> Self;

    /// A handle with `name` appended to the logger name.
    fn with_name(&self, name: &str) -> Self;
}
