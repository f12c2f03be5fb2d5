//! Typed error definitions for Echo Conveyor.
//!
//! Configuration errors are designed to be:
//!
//! - **Serializable** so a host can forward them over its own IPC
//! - **Displayable** for logging via Display trait
//! - **Matchable** for error handling logic via enum variants

mod config;

pub use config::ConfigError;

/// Standard Result type for configuration resolution.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = ConfigError::UnknownKey { key: "publisher_port".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("UnknownKey"));
        assert!(json.contains("publisher_port"));

        let deserialized: ConfigError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::Parse {
            key: "publisher_url".to_string(),
            message: "relative URL without a base".to_string(),
        };

        let msg = format!("{}", err);
        assert!(msg.contains("publisher_url"));
        assert!(msg.contains("relative URL without a base"));
    }
}
