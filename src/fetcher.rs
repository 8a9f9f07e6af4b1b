//! Privileged-side HTTP fetch against the upstream distance-matrix API.
//!
//! The HTTP send is a thin shell; all response interpretation lives in
//! [`decode_body`], a pure function that maps the upstream payload onto the
//! error taxonomy and hands clean text to the normalizer.

use std::future::Future;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::config;
use crate::core::normalize::normalize;
use crate::core::{CommuteRequest, CommuteResult};
use crate::error::CommuteError;
use crate::relay::CommuteBackend;

/// Owns the outbound HTTP call. Runs only in the privileged context.
pub struct CommuteFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl CommuteFetcher {
    pub fn new() -> Self {
        Self::with_base_url(config::DISTANCE_MATRIX_BASE_URL)
    }

    /// Point the fetcher at a different endpoint (stand-in servers in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        CommuteFetcher {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for CommuteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl CommuteBackend for CommuteFetcher {
    fn fetch(
        &self,
        request: CommuteRequest,
    ) -> impl Future<Output = Result<CommuteResult, CommuteError>> + Send {
        async move {
            let departure_time = request.departure_time.to_string();
            let query = [
                ("origins", request.origin.as_str()),
                ("destinations", request.destination.as_str()),
                ("departure_time", departure_time.as_str()),
                ("mode", request.travel_mode.as_query_param()),
                ("key", request.api_key.as_str()),
            ];

            let response = self
                .client
                .get(&self.base_url)
                .query(&query)
                .send()
                .await
                .map_err(|e| CommuteError::Network(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| CommuteError::Network(e.to_string()))?;

            decode_body(status, &body, &request)
        }
    }
}

/// Decode an upstream response into a [`CommuteResult`].
///
/// Failure mapping, in order:
/// - non-2xx transport status → [`CommuteError::Network`]
/// - unparseable body or top-level status ≠ "OK" → [`CommuteError::Api`]
/// - missing or non-"OK" first origin/destination element → [`CommuteError::Route`]
pub fn decode_body(
    status: StatusCode,
    body: &str,
    request: &CommuteRequest,
) -> Result<CommuteResult, CommuteError> {
    if !status.is_success() {
        return Err(CommuteError::Network(status.to_string()));
    }

    let data: DistanceMatrixResponse = serde_json::from_str(body)
        .map_err(|e| CommuteError::Api(format!("unparseable response: {e}")))?;

    if data.status != "OK" {
        return Err(CommuteError::Api(data.status));
    }

    let element = data
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or_else(|| CommuteError::Route("missing route element".into()))?;

    if element.status != "OK" {
        return Err(CommuteError::Route(element.status.clone()));
    }

    // An "OK" element without both fields is a schema deviation, not a route.
    let (duration, distance) = match (&element.duration, &element.distance) {
        (Some(duration), Some(distance)) => (duration.text.as_str(), distance.text.as_str()),
        _ => {
            return Err(CommuteError::Route(
                "missing duration/distance in route element".into(),
            ))
        }
    };
    tracing::debug!(duration, distance, "distance-matrix element decoded");

    Ok(normalize(duration, distance, request.travel_mode))
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    status: String,
    duration: Option<TextField>,
    distance: Option<TextField>,
}

#[derive(Debug, Deserialize)]
struct TextField {
    text: String,
}
