//! Commute travel-time client with a privileged fetch relay.
//!
//! A sandboxed UI surface has no outbound network privilege for the upstream
//! distance-matrix API; it delegates each fetch to a privileged service over
//! an explicit request/response relay with a caller-owned timeout.
//!
//! ```no_run
//! use std::sync::Arc;
//! use commute_relay::{CommuteClient, CommuteFetcher, RelayService, Settings, SqliteStore, TravelMode};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = Arc::new(SqliteStore::open(std::path::Path::new("settings.db"))?);
//! let settings = Arc::new(Settings::load(store)?);
//! settings.save_api_key("my-api-key")?;
//! settings.save_work_address("1 Office Way")?;
//!
//! let relay = RelayService::spawn(CommuteFetcher::new());
//! let client = CommuteClient::new(relay, settings);
//! let result = client.get_commute_details("Home St 1", TravelMode::Driving).await?;
//! println!("{} ({})", result.duration, result.distance);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
mod core;
mod error;
mod fetcher;
pub mod relay;
pub mod settings;

pub use crate::client::{CommuteClient, API_KEY_NOT_SET, WORK_ADDRESS_NOT_SET};
pub use crate::core::{CommuteRequest, CommuteResult, TravelMode};
pub use crate::error::CommuteError;
pub use crate::fetcher::CommuteFetcher;
pub use crate::relay::{CommuteBackend, RelayClient, RelayService};
pub use crate::settings::{MemoryStore, Settings, SettingsStore, SqliteStore};

/// Initialize tracing with an env-filter, defaulting to `commute_relay=info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "commute_relay=info".into()),
        )
        .init();
}

/// Wire a production relay: spawns the privileged service around an HTTP
/// fetcher and returns the UI-side client handle.
pub fn spawn_relay() -> RelayClient {
    RelayService::spawn(CommuteFetcher::new())
}
