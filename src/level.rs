// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::config::ConfigError;
use std::fmt::Display;
use std::str::FromStr;

/**
Severity of a message, or the output level of a scope.

Variants are ordered by increasing verbosity.  A scope whose output level is `L`
emits a message at level `M` when `M` is not [Level::None] and `M <= L`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Emits nothing when used as an output level.
    None,
    /// Runtime errors
    Error,
    /// Suspicious conditions
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Detail for debugging
    Debug,
}

impl Level {
    pub const fn name(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /**
    Whether a message at `self` passes a scope configured at `output_level`.
    */
    pub fn passes(self, output_level: Level) -> bool {
        self != Level::None && self <= output_level
    }

    pub(crate) const fn to_u8(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_u8(raw: u8) -> Level {
        match raw {
            0 => Level::None,
            1 => Level::Error,
            2 => Level::Warn,
            3 => Level::Info,
            _ => Level::Debug,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Level::None),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!(" info ".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("none".parse::<Level>().unwrap(), Level::None);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(ConfigError::InvalidLevel(name)) if name == "verbose"
        ));
    }

    #[test]
    fn passes_respects_output_level() {
        assert!(Level::Error.passes(Level::Info));
        assert!(Level::Info.passes(Level::Info));
        assert!(!Level::Debug.passes(Level::Info));
        assert!(!Level::Error.passes(Level::None));
        assert!(!Level::None.passes(Level::Debug));
    }

    #[test]
    fn u8_conversion_is_stable() {
        for level in [Level::None, Level::Error, Level::Warn, Level::Info, Level::Debug] {
            assert_eq!(Level::from_u8(level.to_u8()), level);
        }
    }
}
