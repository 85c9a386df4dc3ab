// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output level configuration.
//!
//! Levels are configured with a compact level string, `"scope:level,scope:level,level"`.
//! An entry without a scope name applies to the default scope.
//!
//! ```rust
//! use scopewise::{configure, find_scope, Level, Options};
//!
//! let options = Options {
//!     output_levels: "config-doc:debug,warn".to_string(),
//!     ..Options::default()
//! };
//! configure(&options).unwrap();
//! assert_eq!(find_scope("config-doc").unwrap().output_level(), Level::Debug);
//! ```

use crate::kv;
use crate::level::Level;
use crate::scope::{DEFAULT_SCOPE_NAME, default_scope, register_scope, scopes, validate_name};
use thiserror::Error;

/// Environment variable holding a level string such as `"klog:debug,info"`.
pub const OUTPUT_LEVEL_ENV: &str = "SCOPEWISE_OUTPUT_LEVEL";
/// Environment variable holding the level applied to every scope first.
pub const DEFAULT_LEVEL_ENV: &str = "SCOPEWISE_DEFAULT_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid log level {0:?}")]
    InvalidLevel(String),
    #[error("invalid scope name {0:?}")]
    InvalidScopeName(String),
    #[error("invalid output level entry {0:?}, expected <scope>:<level> or <level>")]
    InvalidEntry(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// `"scope:level,..."`; applied after `default_output_level`.
    pub output_levels: String,
    /// Applied to every registered scope before `output_levels`.
    pub default_output_level: Level,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            output_levels: String::new(),
            default_output_level: Level::Info,
        }
    }
}

impl Options {
    /**
    Reads [OUTPUT_LEVEL_ENV] and [DEFAULT_LEVEL_ENV].  Unset variables keep their defaults.
    */
    pub fn from_env() -> Result<Options, ConfigError> {
        let mut options = Options::default();
        if let Ok(spec) = std::env::var(OUTPUT_LEVEL_ENV) {
            parse_output_levels(&spec)?;
            options.output_levels = spec;
        }
        if let Ok(level) = std::env::var(DEFAULT_LEVEL_ENV) {
            options.default_output_level = level.parse()?;
        }
        Ok(options)
    }
}

/// Parses `"scope:level,level,..."` into `(scope, level)` pairs in order.
pub fn parse_output_levels(spec: &str) -> Result<Vec<(String, Level)>, ConfigError> {
    let mut parsed = Vec::new();
    for entry in spec.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (scope, level) = match entry.split_once(':') {
            Some((scope, level)) => (scope.trim(), level),
            None => (DEFAULT_SCOPE_NAME, entry),
        };
        if scope.is_empty() || level.contains(':') {
            return Err(ConfigError::InvalidEntry(entry.to_string()));
        }
        parsed.push((scope.to_string(), level.parse()?));
    }
    Ok(parsed)
}

/**
Applies `options` to the scope registry.

Every registered scope first receives `default_output_level`; then each entry of
`output_levels` is applied in order.  Unknown scope names are registered, so configuration
may happen before the component owning the scope registers it.  Nothing is changed, and
no scope is registered, if the level string fails to parse or names an invalid scope.
*/
pub fn configure(options: &Options) -> Result<(), ConfigError> {
    let entries = parse_output_levels(&options.output_levels)?;
    for (name, _) in &entries {
        validate_name(name)?;
    }
    let mut targets = Vec::with_capacity(entries.len());
    for (name, level) in entries {
        targets.push((register_scope(&name, "")?, level));
    }

    for scope in scopes() {
        scope.set_output_level(options.default_output_level);
    }
    for (scope, level) in &targets {
        scope.set_output_level(*level);
    }

    let log = default_scope();
    for (scope, level) in &targets {
        log.debug(
            "configured output level",
            &kv!["scope", scope.name(), "level", level.name()],
        );
    }
    Ok(())
}
