// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::value::Value;

/**
A severity-leveled logging scope.

Exposes discrete debug/info/error writes together with an independent enablement check
per severity.  [Scope](crate::Scope) is the implementation shipped with this crate; the
[VerbosityAdapter](crate::VerbosityAdapter) works against any implementation.

Implementations are cheap handles: cloning one must not copy its configuration, and
enablement checks must reflect the configuration at the time of the call.
*/
pub trait SeverityScope: Clone + Send + Sync {
    fn debug_enabled(&self) -> bool;
    fn info_enabled(&self) -> bool;
    fn error_enabled(&self) -> bool;

    /**
    Writes a debug message.  The implementation applies its own filtering and
    terminates the line itself.
    */
    fn debug(&self, message: &str, fields: &[Value]);
    fn info(&self, message: &str, fields: &[Value]);
    fn error(&self, message: &str, fields: &[Value]);

    /**
    Returns a scope carrying `labels` as persistent structured context for every
    later write through it.
    */
    fn with_labels(&self, labels: &[Value]) -> Self;
}
