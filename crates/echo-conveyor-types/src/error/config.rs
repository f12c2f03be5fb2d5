//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while resolving the host-supplied configuration map.
///
/// Every variant aborts the invocation before any request is issued.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// The configuration is not a key/value mapping at all
    #[error("Unhandled configuration parameter structure (expected a key/value mapping of strings)")]
    Structure,

    /// A configuration value is not a string
    #[error("Configuration key '{key}': unhandled value type (expected string)")]
    Type {
        /// Key whose value had the wrong type
        key: String,
    },

    /// A key outside the recognized set
    #[error("Unhandled configuration key: '{key}'")]
    UnknownKey {
        /// The unrecognized key
        key: String,
    },

    /// `publisher_url` did not parse as an absolute URL
    #[error("Couldn't parse {key}: {message}")]
    Parse {
        /// Key whose value failed to parse
        key: String,
        /// Description of the parse failure
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error from a `url` parse failure.
    pub fn from_url_error(key: &str, e: &url::ParseError) -> Self {
        Self::Parse { key: key.to_string(), message: e.to_string() }
    }

    /// The configuration key this error names, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Structure => None,
            Self::Type { key } | Self::UnknownKey { key } | Self::Parse { key, .. } => Some(key),
        }
    }
}
