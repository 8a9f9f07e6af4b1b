//! Privileged-side relay service.
//!
//! `RelayService::spawn` installs the reply handler: a tokio task that loops
//! on the request channel and answers each envelope exactly once. Commute
//! requests are delegated to a [`CommuteBackend`]; each one runs in its own
//! task so overlapping requests are served independently, in no particular
//! order.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use super::{CommutePayload, Envelope, RelayRequest, RelayResponse};
use crate::config;
use crate::core::{CommuteRequest, CommuteResult};
use crate::error::CommuteError;
use crate::relay::RelayClient;

/// The operation the privileged context performs on behalf of the UI.
///
/// Implemented by the HTTP fetcher in production and by stubs in tests.
pub trait CommuteBackend: Send + Sync + 'static {
    fn fetch(
        &self,
        request: CommuteRequest,
    ) -> impl Future<Output = Result<CommuteResult, CommuteError>> + Send;
}

/// Spawns the privileged-side reply loop.
pub struct RelayService;

impl RelayService {
    /// Start the service task and return the client handle for the UI side.
    ///
    /// The task exits once every client handle is dropped.
    pub fn spawn<B: CommuteBackend>(backend: B) -> RelayClient {
        let (tx, mut rx) = mpsc::channel::<Envelope>(config::RELAY_CHANNEL_CAPACITY);
        let backend = Arc::new(backend);

        tokio::spawn(async move {
            tracing::info!("relay service started");
            while let Some(envelope) = rx.recv().await {
                let backend = Arc::clone(&backend);
                tokio::spawn(async move {
                    Self::handle(backend, envelope).await;
                });
            }
            tracing::info!("relay service stopped: all clients dropped");
        });

        RelayClient::new(tx)
    }

    async fn handle<B: CommuteBackend>(backend: Arc<B>, envelope: Envelope) {
        let response = match envelope.request {
            RelayRequest::Ping => RelayResponse::pong(),
            RelayRequest::GetCommuteDetails(request) => {
                tracing::debug!(
                    origin = %request.origin,
                    mode = request.travel_mode.as_query_param(),
                    "processing commute details request"
                );
                match backend.fetch(request).await {
                    Ok(result) => RelayResponse::ok(CommutePayload {
                        duration: Some(result.duration),
                        distance: Some(result.distance),
                        travel_mode: result.travel_mode,
                    }),
                    Err(e) => {
                        tracing::warn!("commute fetch failed: {e}");
                        RelayResponse::err(e.to_string())
                    }
                }
            }
        };

        // The caller may have timed out and dropped its receiver; per the
        // at-most-one-reply contract that only makes this send a no-op.
        if envelope.reply.send(response).is_err() {
            tracing::debug!("relay reply dropped: caller already settled");
        }
    }
}
