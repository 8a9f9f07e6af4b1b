//! Data model for a single commute check.

use serde::{Deserialize, Serialize};

/// Mode of transportation, as understood by the upstream distance-matrix API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Driving,
    Walking,
    Transit,
    Bicycling,
}

impl TravelMode {
    /// The lower-cased form the upstream API expects in the `mode` query parameter.
    pub fn as_query_param(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Transit => "transit",
            TravelMode::Bicycling => "bicycling",
        }
    }
}

/// A single outbound request, constructed fresh per call and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteRequest {
    pub origin: String,
    pub destination: String,
    pub travel_mode: TravelMode,
    /// Unix seconds, pinned to 13:00 local time on the current date.
    pub departure_time: i64,
    pub api_key: String,
}

/// The stable internal result handed to the UI surface.
///
/// `duration` and `distance` are human-readable strings as returned by the
/// upstream API (post-normalization); no arithmetic is performed on them.
///
/// Invariant, enforced by the constructors: `success == true` implies
/// non-empty `duration`/`distance` and no `error`; `success == false`
/// implies a non-empty `error` and empty `duration`/`distance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteResult {
    pub duration: String,
    pub distance: String,
    pub travel_mode: TravelMode,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommuteResult {
    /// Build a successful result.
    pub fn ok(
        duration: impl Into<String>,
        distance: impl Into<String>,
        travel_mode: TravelMode,
    ) -> Self {
        CommuteResult {
            duration: duration.into(),
            distance: distance.into(),
            travel_mode,
            success: true,
            error: None,
        }
    }

    /// Build a failed result carrying a human-readable message.
    pub fn failure(travel_mode: TravelMode, error: impl Into<String>) -> Self {
        CommuteResult {
            duration: String::new(),
            distance: String::new(),
            travel_mode,
            success: false,
            error: Some(error.into()),
        }
    }
}
