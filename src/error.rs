//! Unified error type for the commute request pipeline.
//!
//! `CommuteError` is the single error type crossing every layer: the fetcher
//! produces `Network`/`Api`/`Route`, the relay produces `Timeout`/`Channel`,
//! and the client produces `Configuration`. It serializes as
//! `{ "kind": "...", "message": "..." }` so a UI surface can programmatically
//! distinguish error categories.

use serde::ser::SerializeStruct;

/// Fallback message when the messaging channel fails without its own detail.
pub const CHANNEL_FALLBACK_MESSAGE: &str = "Communication error with background service";

/// Application-level error for a single commute request.
///
/// Each variant maps to a distinct failure domain. Every failure is scoped to
/// the one request that produced it; nothing is retried and nothing is fatal.
#[derive(Debug, thiserror::Error)]
pub enum CommuteError {
    /// Missing API key or work address. Handled locally by the client;
    /// never reaches the relay or the network layer.
    #[error("{0}")]
    Configuration(String),

    /// Non-2xx transport status (or failure to reach) the upstream API.
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream top-level status other than "OK" (invalid key, quota
    /// exceeded, malformed response).
    #[error("API Error: {0}")]
    Api(String),

    /// No usable route for the requested origin/destination/mode
    /// (element status such as ZERO_RESULTS or NOT_FOUND).
    #[error("Route Error: {0}")]
    Route(String),

    /// No relay reply arrived within the deadline.
    #[error("API request timed out")]
    Timeout,

    /// The messaging channel itself failed (delivery error, listener gone,
    /// or a reply that violates the protocol contract).
    #[error("{0}")]
    Channel(String),
}

impl CommuteError {
    /// Returns the error kind as a string matching the variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            CommuteError::Configuration(_) => "Configuration",
            CommuteError::Network(_) => "Network",
            CommuteError::Api(_) => "Api",
            CommuteError::Route(_) => "Route",
            CommuteError::Timeout => "Timeout",
            CommuteError::Channel(_) => "Channel",
        }
    }

    /// Reconstruct an error from the message string carried in a relay reply.
    ///
    /// Replies cross the relay as `{ success: false, error: string }`; the
    /// fetcher-side kinds are recovered from their `Display` prefixes. A
    /// message with no recognized prefix is a contract violation and maps to
    /// `Channel`.
    pub(crate) fn from_reply_message(message: &str) -> Self {
        if let Some(status) = message.strip_prefix("API Error: ") {
            CommuteError::Api(status.to_string())
        } else if let Some(status) = message.strip_prefix("Route Error: ") {
            CommuteError::Route(status.to_string())
        } else if let Some(detail) = message.strip_prefix("Network error: ") {
            CommuteError::Network(detail.to_string())
        } else {
            CommuteError::Channel(message.to_string())
        }
    }
}

/// Custom Serialize: produces `{ "kind": "Variant", "message": "..." }` for the UI.
impl serde::Serialize for CommuteError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("CommuteError", 2)?;
        s.serialize_field("kind", self.kind())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}
