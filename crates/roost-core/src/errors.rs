//! Core error types
//!
//! Errors raised while parsing handles or loading configuration. The profile
//! engine itself never returns these: it degrades instead of failing.

use thiserror::Error;

/// Errors from the data model and configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An acct handle could not be split into username and domain.
    #[error("invalid acct {acct:?}: {reason}")]
    InvalidAcct {
        /// The raw handle
        acct: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration is missing or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// A document could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl CoreError {
    /// Create an invalid acct error.
    pub fn invalid_acct(acct: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAcct {
            acct: acct.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
