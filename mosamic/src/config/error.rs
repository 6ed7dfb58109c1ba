//! Error types for configuration parsing and validation.

use std::fmt;

/// Errors produced while building a [`super::MosaicConfig`].
///
/// Every variant carries the offending key so the caller can surface it
/// verbatim as a client input error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric key failed to parse as a finite non-negative integer.
    InvalidNumber { key: &'static str, value: String },
    /// A key parsed but carries a value the pipeline cannot use.
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
    /// A key parsed but is outside its allowed range.
    OutOfRange {
        key: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid_number(key: &'static str, value: &str) -> Self {
        ConfigError::InvalidNumber {
            key,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_value(key: &'static str, value: &str, expected: &'static str) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            expected,
        }
    }

    pub(crate) fn out_of_range(key: &'static str, reason: &'static str) -> Self {
        ConfigError::OutOfRange { key, reason }
    }

    /// The configuration key this error refers to.
    pub fn key(&self) -> &'static str {
        match self {
            ConfigError::InvalidNumber { key, .. } => key,
            ConfigError::InvalidValue { key, .. } => key,
            ConfigError::OutOfRange { key, .. } => key,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "Invalid number for '{}': {:?}", key, value)
            }
            ConfigError::InvalidValue {
                key,
                value,
                expected,
            } => {
                write!(f, "Invalid value for '{}': {:?} ({})", key, value, expected)
            }
            ConfigError::OutOfRange { key, reason } => {
                write!(f, "Value for '{}' out of range: {}", key, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_key() {
        let err = ConfigError::invalid_number("canvasWidth", "abc");
        let text = err.to_string();
        assert!(text.contains("canvasWidth"));
        assert!(text.contains("abc"));
        assert_eq!(err.key(), "canvasWidth");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ConfigError::out_of_range("width", "must be > 0");
        assert!(err.to_string().contains("must be > 0"));
    }
}
