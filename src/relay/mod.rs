//! Request/response protocol between the UI context and the privileged context.
//!
//! The capability boundary is modeled as two logical services exchanging
//! envelopes over a bounded mpsc channel. Each envelope embeds a oneshot
//! reply sender, which is what guarantees at most one reply per request and
//! makes a late reply (after the caller's timeout) a structural no-op: the
//! receiver is already gone.
//!
//! - [`RelayClient`] — UI side; owns the deadline timers and error translation
//! - [`RelayService`] — privileged side; loops on the receiver and answers
//!   each envelope exactly once

mod client;
mod service;

pub use client::RelayClient;
pub use service::{CommuteBackend, RelayService};

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::core::{CommuteRequest, TravelMode};

/// A request message sent from the UI context to the privileged context.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", content = "data", rename_all = "camelCase")]
pub enum RelayRequest {
    /// Fetch commute details for the embedded request.
    GetCommuteDetails(CommuteRequest),
    /// Liveness probe; the privileged context must answer "pong".
    Ping,
}

/// The single reply the privileged context sends for one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CommutePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn ok(result: CommutePayload) -> Self {
        RelayResponse {
            success: true,
            result: Some(result),
            ..Default::default()
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        RelayResponse {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn pong() -> Self {
        RelayResponse {
            success: true,
            message: Some("pong".into()),
            ..Default::default()
        }
    }
}

/// Commute fields carried in a successful reply.
///
/// Duration and distance are optional on the wire; the client substitutes
/// empty strings for anything missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommutePayload {
    pub duration: Option<String>,
    pub distance: Option<String>,
    pub travel_mode: TravelMode,
}

/// One in-flight exchange: the request plus its dedicated reply slot.
#[derive(Debug)]
pub struct Envelope {
    pub request: RelayRequest,
    pub reply: oneshot::Sender<RelayResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commute_request_wire_shape() {
        let message = RelayRequest::GetCommuteDetails(CommuteRequest {
            origin: "Home".into(),
            destination: "Work".into(),
            travel_mode: TravelMode::Driving,
            departure_time: 1_700_000_000,
            api_key: "key".into(),
        });
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["action"], "getCommuteDetails");
        assert_eq!(json["data"]["origin"], "Home");
        assert_eq!(json["data"]["travelMode"], "DRIVING");
    }

    #[test]
    fn test_ping_wire_shape() {
        let json = serde_json::to_value(RelayRequest::Ping).unwrap();
        assert_eq!(json["action"], "ping");
        assert!(json.as_object().unwrap().get("data").is_none());
    }

    #[test]
    fn test_success_reply_wire_shape() {
        let response = RelayResponse::ok(CommutePayload {
            duration: Some("25 mins".into()),
            distance: Some("12 km".into()),
            travel_mode: TravelMode::Transit,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"]["duration"], "25 mins");
        assert_eq!(json["result"]["travelMode"], "TRANSIT");
        assert!(json.as_object().unwrap().get("error").is_none());
    }

    #[test]
    fn test_error_reply_wire_shape() {
        let json = serde_json::to_value(RelayResponse::err("API Error: OVER_QUERY_LIMIT")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "API Error: OVER_QUERY_LIMIT");
        assert!(json.as_object().unwrap().get("result").is_none());
    }

    #[test]
    fn test_pong_reply_wire_shape() {
        let json = serde_json::to_value(RelayResponse::pong()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "pong");
    }
}
