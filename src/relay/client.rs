//! UI-side relay client.
//!
//! Owns the caller's deadline and the translation of transport failures into
//! [`CommuteError`]s. Every exchange is a fresh envelope with its own oneshot
//! reply slot and its own timer, so overlapping calls never interfere.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use super::{CommutePayload, Envelope, RelayRequest, RelayResponse};
use crate::config;
use crate::core::CommuteRequest;
use crate::error::{CommuteError, CHANNEL_FALLBACK_MESSAGE};

/// Handle for sending requests to the privileged relay service.
#[derive(Clone)]
pub struct RelayClient {
    tx: mpsc::Sender<Envelope>,
}

impl RelayClient {
    pub(crate) fn new(tx: mpsc::Sender<Envelope>) -> Self {
        RelayClient { tx }
    }

    /// Fetch commute details through the privileged context.
    ///
    /// Settles exactly once: a reply, a channel failure, or a timeout after
    /// 10 seconds. A reply arriving after the timeout is discarded by the
    /// dropped receiver and never observed by the caller.
    pub async fn get_commute_details(
        &self,
        request: CommuteRequest,
    ) -> Result<CommutePayload, CommuteError> {
        let response = self
            .exchange(
                RelayRequest::GetCommuteDetails(request),
                Duration::from_secs(config::COMMUTE_TIMEOUT_SECS),
            )
            .await?;

        if response.success {
            response.result.ok_or_else(|| {
                CommuteError::Channel("success reply carried no result".into())
            })
        } else {
            let message = response
                .error
                .unwrap_or_else(|| "Unknown error fetching commute details".into());
            Err(CommuteError::from_reply_message(&message))
        }
    }

    /// Liveness probe against the privileged context.
    ///
    /// Resolves to a boolean rather than erroring: diagnostics only, never a
    /// user-facing failure. A non-responding context yields `false` at the
    /// 2-second deadline.
    pub async fn ping(&self) -> bool {
        match self
            .exchange(
                RelayRequest::Ping,
                Duration::from_secs(config::PING_TIMEOUT_SECS),
            )
            .await
        {
            Ok(response) => {
                response.success && response.message.as_deref() == Some("pong")
            }
            Err(e) => {
                tracing::debug!("ping failed: {e}");
                false
            }
        }
    }

    /// Single-round exchange: send one envelope, await its one reply or the
    /// deadline, whichever comes first.
    async fn exchange(
        &self,
        request: RelayRequest,
        deadline: Duration,
    ) -> Result<RelayResponse, CommuteError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(Envelope {
                request,
                reply: reply_tx,
            })
            .await
            .map_err(|e| CommuteError::Channel(e.to_string()))?;

        match tokio::time::timeout(deadline, reply_rx).await {
            Ok(Ok(response)) => Ok(response),
            // Reply sender dropped without answering: listener absent.
            Ok(Err(_)) => Err(CommuteError::Channel(CHANNEL_FALLBACK_MESSAGE.into())),
            Err(_) => Err(CommuteError::Timeout),
        }
    }
}
