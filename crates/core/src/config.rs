//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables themselves, so
//! every request in a multi-threaded runtime sees the same settings.

use crate::constants::{DEFAULT_SUGGESTION_LIMIT, DEFAULT_SUGGESTION_MIN_CHARS};
use crate::{SymptomError, SymptomResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    suggestion_limit: usize,
    suggestion_min_chars: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// Both values must be at least 1.
    pub fn new(suggestion_limit: usize, suggestion_min_chars: usize) -> SymptomResult<Self> {
        if suggestion_limit == 0 {
            return Err(SymptomError::InvalidConfig(
                "suggestion_limit must be at least 1".into(),
            ));
        }
        if suggestion_min_chars == 0 {
            return Err(SymptomError::InvalidConfig(
                "suggestion_min_chars must be at least 1".into(),
            ));
        }

        Ok(Self {
            suggestion_limit,
            suggestion_min_chars,
        })
    }

    /// Build a configuration from optional raw environment values.
    ///
    /// Missing or blank values fall back to the defaults.
    pub fn from_env_values(
        suggestion_limit: Option<String>,
        suggestion_min_chars: Option<String>,
    ) -> SymptomResult<Self> {
        Self::new(
            usize_from_env_value(
                "SYMCHECK_SUGGESTION_LIMIT",
                suggestion_limit,
                DEFAULT_SUGGESTION_LIMIT,
            )?,
            usize_from_env_value(
                "SYMCHECK_SUGGESTION_MIN_CHARS",
                suggestion_min_chars,
                DEFAULT_SUGGESTION_MIN_CHARS,
            )?,
        )
    }

    pub fn suggestion_limit(&self) -> usize {
        self.suggestion_limit
    }

    pub fn suggestion_min_chars(&self) -> usize {
        self.suggestion_min_chars
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            suggestion_min_chars: DEFAULT_SUGGESTION_MIN_CHARS,
        }
    }
}

/// Parse a positive count from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `default`.
pub fn usize_from_env_value(
    name: &str,
    value: Option<String>,
    default: usize,
) -> SymptomResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(default),
        Some(v) => v.parse::<usize>().map_err(|e| {
            SymptomError::InvalidConfig(format!("{name} must be a positive integer ({v:?}: {e})"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let cfg = CoreConfig::from_env_values(None, Some("   ".into())).expect("defaults");
        assert_eq!(cfg, CoreConfig::default());
        assert_eq!(cfg.suggestion_limit(), 8);
        assert_eq!(cfg.suggestion_min_chars(), 2);
    }

    #[test]
    fn explicit_values_are_parsed() {
        let cfg = CoreConfig::from_env_values(Some(" 5 ".into()), Some("3".into()))
            .expect("valid config");
        assert_eq!(cfg.suggestion_limit(), 5);
        assert_eq!(cfg.suggestion_min_chars(), 3);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = CoreConfig::from_env_values(Some("0".into()), None).expect_err("zero limit");
        match err {
            SymptomError::InvalidConfig(msg) => assert!(msg.contains("suggestion_limit")),
            other => panic!("expected InvalidConfig error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let err =
            CoreConfig::from_env_values(None, Some("two".into())).expect_err("non-numeric value");
        match err {
            SymptomError::InvalidConfig(msg) => {
                assert!(msg.contains("SYMCHECK_SUGGESTION_MIN_CHARS"))
            }
            other => panic!("expected InvalidConfig error, got {other:?}"),
        }
    }
}
