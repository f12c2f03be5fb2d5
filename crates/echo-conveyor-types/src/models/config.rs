//! Resolved relay configuration.

use url::Url;

/// Configuration key holding the upstream receiver base address.
pub const PUBLISHER_URL_KEY: &str = "publisher_url";
/// Configuration key holding the destination channel name.
pub const PUBLISHER_CHANNEL_KEY: &str = "publisher_channel";

/// Strict configuration record, built fresh for every invocation.
///
/// `upstream_url` is optional at this level: a map that omits
/// `publisher_url` still resolves, and the dispatch fails instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConveyorConfig {
    /// Base address of the upstream receiver.
    pub upstream_url: Option<Url>,
    /// Destination channel embedded in the envelope.
    pub upstream_channel: String,
}

impl ConveyorConfig {
    /// Build a complete record from already-typed values.
    pub fn new(upstream_url: Url, upstream_channel: impl Into<String>) -> Self {
        Self { upstream_url: Some(upstream_url), upstream_channel: upstream_channel.into() }
    }
}

/// Result of a relay attempt that reached the upstream receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Set once any HTTP response came back, whatever its status.
    pub published: bool,
}

impl DispatchOutcome {
    pub const PUBLISHED: Self = Self { published: true };
}
