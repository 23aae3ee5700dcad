//! Warn-vs-raise policy resolution.
//!
//! A failing check either panics or is logged. The decision combines the
//! per-check override with the process-wide [`WarnLevel`]:
//!
//! 1. override `Some(true)`: warn, with the detail the process-wide level asks
//!    for (at least the caller location);
//! 2. no override and a process-wide level other than `Disabled`: warn at that
//!    level;
//! 3. anything else, including an explicit `Some(false)`: raise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Process-wide "errors as warnings" setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    /// Failures raise.
    #[default]
    Disabled,
    /// Failures warn with the message and caller location.
    Minimal,
    /// Failures warn and also dump the call stack to the diagnostic stream.
    Verbose,
}

impl WarnLevel {
    /// Interprets a raw configuration value leniently.
    ///
    /// Known spellings map through [`FromStr`]; any other non-empty value is
    /// treated as truthy and maps to [`WarnLevel::Minimal`].
    #[must_use]
    pub fn from_config_value(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Disabled;
        };
        raw.parse().unwrap_or_else(|err: ConfigError| {
            tracing::debug!(target: "softassert::config", %err, "treating unrecognized warn level as minimal");
            Self::Minimal
        })
    }

    /// Returns true unless the level is `Disabled`.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Canonical name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Minimal => "minimal",
            Self::Verbose => "verbose",
        }
    }
}

impl FromStr for WarnLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "false" | "off" | "no" | "disabled" => Ok(Self::Disabled),
            "1" | "min" | "minimal" | "line" | "lineno" => Ok(Self::Minimal),
            "2" | "full" | "verbose" | "trace" | "traceback" => Ok(Self::Verbose),
            _ => Err(ConfigError::UnknownWarnLevel {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for WarnLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much context accompanies a warn-mode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detail {
    /// Message prefixed with the caller's `file:line`.
    Location,
    /// As `Location`, plus a stack dump on the diagnostic stream.
    Trace,
}

/// Outcome of policy resolution for one failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Panic with the formatted message.
    Raise,
    /// Log the message and continue the chain.
    Warn(Detail),
}

impl Policy {
    /// True when the failure must abort the caller.
    #[must_use]
    pub const fn should_raise(self) -> bool {
        matches!(self, Self::Raise)
    }

    /// Detail level for warnings; `None` when raising.
    #[must_use]
    pub const fn detail(self) -> Option<Detail> {
        match self {
            Self::Raise => None,
            Self::Warn(detail) => Some(detail),
        }
    }
}

/// Resolves the policy for a single failure.
#[must_use]
pub const fn resolve(per_call: Option<bool>, external: WarnLevel) -> Policy {
    match (per_call, external) {
        (Some(true) | None, WarnLevel::Verbose) => Policy::Warn(Detail::Trace),
        (Some(true), _) | (None, WarnLevel::Minimal) => Policy::Warn(Detail::Location),
        _ => Policy::Raise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_raises() {
        assert_eq!(resolve(None, WarnLevel::Disabled), Policy::Raise);
        assert_eq!(WarnLevel::default(), WarnLevel::Disabled);
    }

    #[test]
    fn test_per_call_warn_beats_disabled() {
        let policy = resolve(Some(true), WarnLevel::Disabled);
        assert!(!policy.should_raise());
        assert_eq!(policy.detail(), Some(Detail::Location));
    }

    #[test]
    fn test_per_call_warn_picks_up_verbose_detail() {
        assert_eq!(resolve(Some(true), WarnLevel::Minimal), Policy::Warn(Detail::Location));
        assert_eq!(resolve(Some(true), WarnLevel::Verbose), Policy::Warn(Detail::Trace));
    }

    #[test]
    fn test_process_wide_levels() {
        assert_eq!(resolve(None, WarnLevel::Minimal), Policy::Warn(Detail::Location));
        assert_eq!(resolve(None, WarnLevel::Verbose), Policy::Warn(Detail::Trace));
    }

    #[test]
    fn test_explicit_raise_wins() {
        assert_eq!(resolve(Some(false), WarnLevel::Minimal), Policy::Raise);
        assert_eq!(resolve(Some(false), WarnLevel::Verbose), Policy::Raise);
        assert_eq!(Policy::Raise.detail(), None);
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("1".parse::<WarnLevel>().unwrap(), WarnLevel::Minimal);
        assert_eq!("2".parse::<WarnLevel>().unwrap(), WarnLevel::Verbose);
        assert_eq!(" Verbose ".parse::<WarnLevel>().unwrap(), WarnLevel::Verbose);
        assert_eq!("0".parse::<WarnLevel>().unwrap(), WarnLevel::Disabled);
        assert_eq!("".parse::<WarnLevel>().unwrap(), WarnLevel::Disabled);
        assert!(matches!(
            "sometimes".parse::<WarnLevel>(),
            Err(ConfigError::UnknownWarnLevel { .. })
        ));
    }

    #[test]
    fn test_lenient_config_value() {
        assert_eq!(WarnLevel::from_config_value(None), WarnLevel::Disabled);
        assert_eq!(WarnLevel::from_config_value(Some("off")), WarnLevel::Disabled);
        assert_eq!(WarnLevel::from_config_value(Some("yes please")), WarnLevel::Minimal);
        assert_eq!(WarnLevel::from_config_value(Some("traceback")), WarnLevel::Verbose);
    }

    #[test]
    fn test_warn_level_serde() {
        let level: WarnLevel = serde_json::from_str("\"verbose\"").unwrap();
        assert_eq!(level, WarnLevel::Verbose);
        assert_eq!(serde_json::to_string(&WarnLevel::Minimal).unwrap(), "\"minimal\"");
        assert!(WarnLevel::Minimal.is_enabled());
        assert!(!WarnLevel::Disabled.is_enabled());
        assert_eq!(WarnLevel::Verbose.to_string(), "verbose");
    }
}
