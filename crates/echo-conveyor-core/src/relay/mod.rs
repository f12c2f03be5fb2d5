//! Relay dispatch: one envelope, one POST.

mod path;


use echo_conveyor_types::{ConveyorConfig, DispatchOutcome, Envelope, PLUGIN_INFO};
use reqwest::{header, Client};

use crate::client::{build_http_client, ClientSettings};
use crate::error::TransportError;

pub use path::{join_path, publish_url, PUBLISH_SEGMENT};

/// Number of `"` bytes in a serialized envelope.
///
/// Logged next to the body as a quick eyeball check on escaping.
pub fn quote_count(body: &[u8]) -> usize {
    body.iter().filter(|&&b| b == b'"').count()
}

/// Sends envelopes to the upstream receiver.
///
/// Holds no per-invocation state; one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
}

impl Dispatcher {
    /// Wrap a pre-built client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, TransportError> {
        Ok(Self::new(build_http_client(settings)?))
    }

    /// POST `payload` for `config.upstream_channel` to `<upstream_url>/put`.
    ///
    /// Any HTTP response counts as published: the status is logged at debug
    /// level and the body is dropped unread. Only a request that cannot be
    /// built or completed is an error. There is no retry.
    pub async fn dispatch(
        &self,
        payload: &[u8],
        config: &ConveyorConfig,
    ) -> Result<DispatchOutcome, TransportError> {
        let base = config.upstream_url.as_ref().ok_or(TransportError::MissingUrl)?;
        let target = publish_url(base);

        let envelope = Envelope::new(&config.upstream_channel, payload);
        let body = envelope.to_json()?;

        tracing::info!(
            plugin = PLUGIN_INFO.name,
            payload = %envelope.payload,
            channel = %config.upstream_channel,
            envelope = %String::from_utf8_lossy(&body),
            quotes_num = quote_count(&body),
            "Preparing to publish a message"
        );

        let response = self
            .client
            .post(target.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        tracing::debug!(
            plugin = PLUGIN_INFO.name,
            url = %target,
            status = %response.status(),
            "Upstream responded"
        );

        Ok(DispatchOutcome::PUBLISHED)
    }
}
