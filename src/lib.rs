//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# scopewise

scopewise provides named, severity-leveled logging scopes, and an adapter that lets code
written for *verbosity-leveled* logging write through them.

# The problem

Some libraries log by verbosity: a message is tagged `0` if it is important, and with larger
numbers as it gets more detailed.  There is no notion of "warning" or "debug".  An
application that configures its output per component and per severity has no way to
control that output, short of giving the library its own logger and losing consistent
formatting.

# The scopes

A [Scope] is a named log channel with discrete `debug`, `info`, `warn` and `error` writes
and an output level that decides which of them are emitted.  Scopes are registered by
name, configured with a compact level string, and everything they emit goes to the global
[Logger]s.

```rust
use scopewise::{kv, register_scope, Level};

let scope = register_scope("lib-doc", "controller output").unwrap();
scope.set_output_level(Level::Warn);
scope.info("not shown", &[]);
scope.warn("cache is stale", &kv!["age_s", 90]);
```

# The adapter

[VerbosityAdapter] implements [VerbosityLogger] on top of any [SeverityScope].

| Verbosity          | Routed to     |
|--------------------|---------------|
| no `v()` call      | info          |
| `0..=3`            | info          |
| `4` and above      | debug         |
| errors             | error, always |

```rust
use scopewise::{kv, register_scope, Level, VerbosityLogger};

let scope = register_scope("lib-adapter-doc", "third-party output").unwrap();
let logger = scope.verbosity_adapter();

scope.set_output_level(Level::Info);
assert!(!logger.v(4).enabled());
scope.set_output_level(Level::Debug);
assert!(logger.v(4).enabled());

logger.v(2).info("watch established\n", &kv!["resource", "pods"]);
```

# Configuration

```rust
use scopewise::{configure, Options};

let options = Options {
    output_levels: "lib-config-doc:debug".to_string(),
    ..Options::default()
};
configure(&options).unwrap();
```

[Options::from_env] reads the same settings from `SCOPEWISE_OUTPUT_LEVEL` and
`SCOPEWISE_DEFAULT_LEVEL`.

# Multithreading

Scopes and adapters are `Send + Sync` and immutable apart from a scope's output level,
which is stored atomically.  Changing a level is visible to every clone and every
label-derived scope immediately.
*/

mod adapter;
mod config;
pub mod global_logger;
mod inmemory_logger;
mod level;
mod log_record;
mod logger;
mod macros;
mod scope;
mod severity;
mod stderror_logger;
mod value;
mod verbosity;

pub use adapter::{
    DEBUG_VERBOSITY_THRESHOLD, VerbosityAdapter, new_verbosity_adapter, trim_newline,
};
pub use config::{
    ConfigError, DEFAULT_LEVEL_ENV, OUTPUT_LEVEL_ENV, Options, configure, parse_output_levels,
};
pub use global_logger::{add_global_logger, global_loggers, set_global_loggers, sync};
pub use inmemory_logger::InMemoryLogger;
pub use level::Level;
pub use log_record::LogRecord;
pub use logger::Logger;
pub use scope::{DEFAULT_SCOPE_NAME, Scope, default_scope, find_scope, register_scope, scopes};
pub use severity::SeverityScope;
pub use stderror_logger::StdErrorLogger;
pub use value::{IntoValue, Value};
pub use verbosity::VerbosityLogger;
