//! In-process settings store
//!
//! Nothing survives a restart; useful for tests and for running without a
//! database file.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SettingsError, SettingsResult, SettingsStore};
use crate::models::{SettingsPatch, UserSettings};

#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: RwLock<Option<UserSettings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self) -> SettingsResult<UserSettings> {
        let stored = *self.settings.read().await;
        Ok(stored.unwrap_or_default())
    }

    async fn save(&self, settings: UserSettings) -> SettingsResult<()> {
        settings.validate().map_err(SettingsError::Invalid)?;
        *self.settings.write().await = Some(settings);
        Ok(())
    }

    async fn update(&self, patch: SettingsPatch) -> SettingsResult<UserSettings> {
        let mut stored = self.settings.write().await;
        let next = patch.apply_to(stored.unwrap_or_default());
        next.validate().map_err(SettingsError::Invalid)?;
        *stored = Some(next);
        Ok(next)
    }
}
