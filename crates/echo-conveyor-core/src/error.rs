//! Error types for Echo Conveyor Core.

use echo_conveyor_types::ConfigError;
use thiserror::Error;

/// Failure to build or complete the outbound publish request.
#[derive(Error, Debug)]
pub enum TransportError {
    /// No `publisher_url` was configured, so there is nowhere to send to.
    #[error("no upstream publisher URL configured")]
    MissingUrl,

    /// The envelope could not be encoded.
    #[error("failed to encode envelope: {0}")]
    Encode(#[from] serde_json::Error),

    /// Client construction, connection or transfer failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Error returned to the host for a failed invocation.
#[derive(Error, Debug)]
pub enum ConveyorError {
    /// The configuration map was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The relay attempt did not reach the upstream receiver.
    #[error("Couldn't publish message to upstream: {0}")]
    Transport(#[from] TransportError),

    /// The blocking entry point could not start its runtime.
    #[error("Couldn't start relay runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// Blocking execution was requested from a current-thread runtime worker.
    #[error("Couldn't block on relay: caller is on a current-thread tokio runtime")]
    CurrentThreadRuntime,
}

/// Result type alias for Echo Conveyor operations.
pub type ConveyorResult<T> = Result<T, ConveyorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err = ConveyorError::from(ConfigError::UnknownKey { key: "colour".to_string() });
        assert_eq!(err.to_string(), "Unhandled configuration key: 'colour'");
    }

    #[test]
    fn test_transport_error_prefix() {
        let err = ConveyorError::from(TransportError::MissingUrl);
        assert_eq!(
            err.to_string(),
            "Couldn't publish message to upstream: no upstream publisher URL configured"
        );
    }
}
