//! Settings store
//!
//! Scoring only needs get/save semantics for the user's preferences. The
//! store is injected wherever settings are needed; there is no global.

mod memory;
mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::db::DbError;
use crate::models::{SettingsPatch, UserSettings};

pub use memory::MemorySettingsStore;
pub use sqlite::SqliteSettingsStore;

/// Settings store error types
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings storage error: {0}")]
    Db(#[from] DbError),

    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("Settings task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Persistent home of the user's settings
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current settings, or the defaults if nothing has been stored
    async fn get(&self) -> SettingsResult<UserSettings>;

    /// Validate and persist new settings
    async fn save(&self, settings: UserSettings) -> SettingsResult<()>;

    /// Apply `patch` to the stored settings and persist the result
    ///
    /// A failed read is returned as-is; nothing is written over settings
    /// that could not be loaded. Stores that can serve concurrent writers
    /// override this so the read and the write happen as one step.
    async fn update(&self, patch: SettingsPatch) -> SettingsResult<UserSettings> {
        let next = patch.apply_to(self.get().await?);
        self.save(next).await?;
        Ok(next)
    }
}

/// Read settings, falling back to defaults when the store is unavailable
///
/// Scoring never blocks on or fails because of the store.
pub async fn load_or_default(store: &dyn SettingsStore) -> UserSettings {
    match store.get().await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "settings store unavailable, using defaults");
            UserSettings::default()
        }
    }
}
