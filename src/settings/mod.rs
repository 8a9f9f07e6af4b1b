//! User settings: API key and work address.
//!
//! Settings live in a persistent key/value store behind the
//! [`SettingsStore`] trait, are loaded once at startup, and change only
//! through explicit save operations. Nothing is ever cleared automatically.

mod store;

pub use store::{MemoryStore, SqliteStore};

use std::sync::{Arc, RwLock};

use anyhow::Result;

use crate::config;

/// Persistent key/value store the settings are read from and written to.
///
/// The production implementation is [`SqliteStore`]; tests use [`MemoryStore`].
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory view of the persisted settings.
pub struct Settings {
    store: Arc<dyn SettingsStore>,
    api_key: RwLock<String>,
    work_address: RwLock<String>,
}

impl Settings {
    /// Load both settings from the store. Missing keys load as empty strings.
    pub fn load(store: Arc<dyn SettingsStore>) -> Result<Self> {
        let api_key = store.get(config::API_KEY_STORAGE_KEY)?.unwrap_or_default();
        let work_address = store
            .get(config::WORK_ADDRESS_STORAGE_KEY)?
            .unwrap_or_default();
        tracing::info!(
            api_key_set = !api_key.is_empty(),
            work_address_set = !work_address.is_empty(),
            "settings loaded"
        );
        Ok(Settings {
            store,
            api_key: RwLock::new(api_key),
            work_address: RwLock::new(work_address),
        })
    }

    pub fn api_key(&self) -> String {
        self.api_key.read().unwrap().clone()
    }

    pub fn work_address(&self) -> String {
        self.work_address.read().unwrap().clone()
    }

    /// Persist a new API key and update the in-memory view.
    pub fn save_api_key(&self, key: &str) -> Result<()> {
        self.store.set(config::API_KEY_STORAGE_KEY, key)?;
        *self.api_key.write().unwrap() = key.to_string();
        Ok(())
    }

    /// Persist a new work address and update the in-memory view.
    pub fn save_work_address(&self, address: &str) -> Result<()> {
        self.store.set(config::WORK_ADDRESS_STORAGE_KEY, address)?;
        *self.work_address.write().unwrap() = address.to_string();
        Ok(())
    }
}
