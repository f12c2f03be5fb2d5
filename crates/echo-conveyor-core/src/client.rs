//! HTTP client construction.

use std::time::Duration;

use echo_conveyor_types::PLUGIN_INFO;

use crate::error::TransportError;

/// Timeouts applied to every publish request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSettings {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self { timeout_secs: 30, connect_timeout_secs: 10 }
    }
}

/// Build the HTTP client used for publishing.
///
/// Zero timeouts are raised to one second rather than disabling the bound.
pub fn build_http_client(settings: &ClientSettings) -> Result<reqwest::Client, TransportError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs.max(1)))
        .tcp_nodelay(true)
        .user_agent(PLUGIN_INFO.user_agent())
        .build()?;
    Ok(client)
}
