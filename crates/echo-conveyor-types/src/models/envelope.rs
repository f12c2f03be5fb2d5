//! Wire envelope posted to the upstream receiver.

use serde::Serialize;
use std::borrow::Cow;

/// JSON body of a publish request: `{"channel": "...", "payload": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<'a> {
    pub channel: Cow<'a, str>,
    pub payload: Cow<'a, str>,
}

impl<'a> Envelope<'a> {
    /// Wrap a raw payload for `channel`.
    ///
    /// Valid UTF-8 is carried as-is; invalid sequences are replaced with
    /// U+FFFD since the wire format only holds JSON strings.
    pub fn new(channel: &'a str, payload: &'a [u8]) -> Self {
        Self { channel: Cow::Borrowed(channel), payload: String::from_utf8_lossy(payload) }
    }

    /// Serialize to the request body.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
