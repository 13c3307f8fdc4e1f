//! Parse configuration
//!
//! The configuration is supplied per parser instance: the separator that
//! delimits chained variants from the base utility, and an optional name
//! prefix. A separator that cannot delimit (empty, or containing a
//! bracket, which would collide with bracketed literal spans) is a fatal
//! configuration error at construction time, not a per-token rejection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Configuration for candidate parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Delimiter between chained variants and the base utility.
    pub separator: String,
    /// Optional utility name prefix. Recorded on every candidate but not
    /// stripped from the token text.
    pub prefix: String,
}

impl ParseConfig {
    pub fn new(separator: impl Into<String>, prefix: impl Into<String>) -> Self {
        ParseConfig {
            separator: separator.into(),
            prefix: prefix.into(),
        }
    }

    /// Check that the separator can actually delimit tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        if self.separator.contains('[') || self.separator.contains(']') {
            return Err(ConfigError::BracketInSeparator(self.separator.clone()));
        }
        Ok(())
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig::new(":", "")
    }
}

/// Errors that make a configuration unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptySeparator,
    BracketInSeparator(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySeparator => write!(f, "Separator must not be empty"),
            ConfigError::BracketInSeparator(separator) => {
                write!(
                    f,
                    "Separator '{}' must not contain brackets; brackets delimit literal spans",
                    separator
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
