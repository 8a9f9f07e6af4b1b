//! UI-context commute client.
//!
//! The one entry point the UI surface calls. Reads the current settings,
//! pins the departure time, and drives a single request through the relay.
//! No retries: each user action is exactly one request, and each failure is
//! scoped to the request that produced it.

use std::sync::Arc;

use crate::core::departure::departure_time_today;
use crate::core::{CommuteRequest, CommuteResult, TravelMode};
use crate::error::CommuteError;
use crate::relay::RelayClient;
use crate::settings::Settings;

/// Returned when no API key has been saved.
pub const API_KEY_NOT_SET: &str = "API Key not set";

/// Returned when no work address has been saved.
pub const WORK_ADDRESS_NOT_SET: &str = "Work address not set";

/// UI-facing API for commute checks.
pub struct CommuteClient {
    relay: RelayClient,
    settings: Arc<Settings>,
}

impl CommuteClient {
    pub fn new(relay: RelayClient, settings: Arc<Settings>) -> Self {
        CommuteClient { relay, settings }
    }

    /// Fetch commute details from `origin` to the saved work address.
    ///
    /// Missing configuration comes back as an `Ok` result with
    /// `success == false` and a fixed message, without touching the relay.
    /// Relay and upstream failures propagate as `Err` with the relay's
    /// error message.
    pub async fn get_commute_details(
        &self,
        origin: &str,
        travel_mode: TravelMode,
    ) -> Result<CommuteResult, CommuteError> {
        let api_key = self.settings.api_key();
        if api_key.is_empty() {
            return Ok(CommuteResult::failure(travel_mode, API_KEY_NOT_SET));
        }

        let destination = self.settings.work_address();
        if destination.is_empty() {
            return Ok(CommuteResult::failure(travel_mode, WORK_ADDRESS_NOT_SET));
        }

        let request = CommuteRequest {
            origin: origin.to_string(),
            destination,
            travel_mode,
            departure_time: departure_time_today(),
            api_key,
        };

        tracing::debug!(origin, mode = travel_mode.as_query_param(), "requesting commute details");
        let payload = self.relay.get_commute_details(request).await?;

        Ok(CommuteResult::ok(
            payload.duration.unwrap_or_default(),
            payload.distance.unwrap_or_default(),
            travel_mode,
        ))
    }

    /// Liveness probe of the privileged context. Diagnostics only.
    pub async fn ping(&self) -> bool {
        self.relay.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{
        CommuteBackend, CommutePayload, Envelope, RelayResponse, RelayService,
    };
    use crate::settings::{MemoryStore, SettingsStore};
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    /// Backend that counts how many requests reach the privileged side.
    struct CountingBackend(Arc<AtomicUsize>);

    impl CommuteBackend for CountingBackend {
        fn fetch(
            &self,
            request: CommuteRequest,
        ) -> impl Future<Output = Result<CommuteResult, CommuteError>> + Send {
            self.0.fetch_add(1, Ordering::SeqCst);
            async move { Ok(CommuteResult::ok("25 mins", "12 km", request.travel_mode)) }
        }
    }

    fn settings(api_key: &str, work_address: &str) -> Arc<Settings> {
        let store = Arc::new(MemoryStore::new());
        if !api_key.is_empty() {
            store.set(crate::config::API_KEY_STORAGE_KEY, api_key).unwrap();
        }
        if !work_address.is_empty() {
            store
                .set(crate::config::WORK_ADDRESS_STORAGE_KEY, work_address)
                .unwrap();
        }
        Arc::new(Settings::load(store).unwrap())
    }

    fn counting_client(
        api_key: &str,
        work_address: &str,
    ) -> (CommuteClient, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let relay = RelayService::spawn(CountingBackend(Arc::clone(&calls)));
        (CommuteClient::new(relay, settings(api_key, work_address)), calls)
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_any_request() {
        let (client, calls) = counting_client("", "1 Office Way");
        let result = client
            .get_commute_details("Home", TravelMode::Driving)
            .await
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(API_KEY_NOT_SET));
        assert!(result.duration.is_empty() && result.distance.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_work_address_fails_without_any_request() {
        let (client, calls) = counting_client("abc123", "");
        let result = client
            .get_commute_details("Home", TravelMode::Transit)
            .await
            .unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(WORK_ADDRESS_NOT_SET));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_fetch_maps_to_result() {
        let (client, calls) = counting_client("abc123", "1 Office Way");
        let result = client
            .get_commute_details("Home", TravelMode::Bicycling)
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.duration, "25 mins");
        assert_eq!(result.distance, "12 km");
        assert_eq!(result.travel_mode, TravelMode::Bicycling);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_reply_fields_become_empty_strings() {
        let (tx, mut rx) = mpsc::channel::<Envelope>(1);
        tokio::spawn(async move {
            while let Some(envelope) = rx.recv().await {
                let _ = envelope.reply.send(RelayResponse::ok(CommutePayload {
                    duration: None,
                    distance: None,
                    travel_mode: TravelMode::Walking,
                }));
            }
        });
        let client = CommuteClient::new(
            crate::relay::RelayClient::new(tx),
            settings("abc123", "1 Office Way"),
        );
        let result = client
            .get_commute_details("Home", TravelMode::Walking)
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.duration, "");
        assert_eq!(result.distance, "");
    }

    #[tokio::test]
    async fn test_relay_failure_propagates_message() {
        let (tx, mut rx) = mpsc::channel::<Envelope>(1);
        tokio::spawn(async move {
            while let Some(envelope) = rx.recv().await {
                let _ = envelope
                    .reply
                    .send(RelayResponse::err("API Error: REQUEST_DENIED"));
            }
        });
        let client = CommuteClient::new(
            crate::relay::RelayClient::new(tx),
            settings("abc123", "1 Office Way"),
        );
        let err = client
            .get_commute_details("Home", TravelMode::Driving)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "Api");
        assert!(err.to_string().contains("REQUEST_DENIED"));
    }

    #[tokio::test]
    async fn test_request_carries_pinned_departure_and_settings() {
        let (tx, mut rx) = mpsc::channel::<Envelope>(1);
        let client = CommuteClient::new(
            crate::relay::RelayClient::new(tx),
            settings("abc123", "1 Office Way"),
        );

        let handle = tokio::spawn(async move {
            client
                .get_commute_details("Home", TravelMode::Driving)
                .await
        });

        let envelope = rx.recv().await.unwrap();
        let request = match &envelope.request {
            crate::relay::RelayRequest::GetCommuteDetails(request) => request.clone(),
            other => panic!("unexpected request: {other:?}"),
        };
        assert_eq!(request.origin, "Home");
        assert_eq!(request.destination, "1 Office Way");
        assert_eq!(request.api_key, "abc123");
        assert_eq!(request.departure_time, departure_time_today());

        let _ = envelope.reply.send(RelayResponse::ok(CommutePayload {
            duration: Some("9 mins".into()),
            distance: Some("2 km".into()),
            travel_mode: request.travel_mode,
        }));
        assert!(handle.await.unwrap().unwrap().success);
    }
}
