//! SQLite-backed settings store
//!
//! Settings live in the single row of `user_settings`. Queries run on the
//! blocking pool so async callers are never stalled by disk I/O.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use super::{SettingsError, SettingsResult, SettingsStore};
use crate::db::{Database, DbResult};
use crate::models::{SettingsPatch, UserSettings};

#[derive(Clone)]
pub struct SqliteSettingsStore {
    database: Database,
}

impl SqliteSettingsStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

fn read_settings(conn: &Connection) -> DbResult<Option<UserSettings>> {
    let settings = conn
        .query_row(
            "SELECT sugar_sensitivity, sodium_sensitivity, vegetarian_emphasis
             FROM user_settings WHERE id = 1",
            [],
            |row| {
                Ok(UserSettings {
                    sugar_sensitivity: row.get(0)?,
                    sodium_sensitivity: row.get(1)?,
                    vegetarian_emphasis: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(settings)
}

fn write_settings(conn: &Connection, settings: &UserSettings) -> DbResult<()> {
    let updated_at = chrono::Utc::now().to_rfc3339();
    conn.execute(
        r#"
        INSERT INTO user_settings (id, sugar_sensitivity, sodium_sensitivity, vegetarian_emphasis, updated_at)
        VALUES (1, ?1, ?2, ?3, ?4)
        ON CONFLICT(id) DO UPDATE SET
            sugar_sensitivity = excluded.sugar_sensitivity,
            sodium_sensitivity = excluded.sodium_sensitivity,
            vegetarian_emphasis = excluded.vegetarian_emphasis,
            updated_at = excluded.updated_at
        "#,
        params![
            settings.sugar_sensitivity,
            settings.sodium_sensitivity,
            settings.vegetarian_emphasis,
            updated_at,
        ],
    )?;
    Ok(())
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn get(&self) -> SettingsResult<UserSettings> {
        let database = self.database.clone();
        let stored = tokio::task::spawn_blocking(move || database.with_conn(read_settings)).await??;
        Ok(stored.unwrap_or_default())
    }

    async fn save(&self, settings: UserSettings) -> SettingsResult<()> {
        settings.validate().map_err(SettingsError::Invalid)?;
        let database = self.database.clone();
        tokio::task::spawn_blocking(move || {
            database.with_conn(|conn| write_settings(conn, &settings))
        })
        .await??;
        tracing::info!(
            sugar_sensitivity = settings.sugar_sensitivity,
            sodium_sensitivity = settings.sodium_sensitivity,
            vegetarian_emphasis = settings.vegetarian_emphasis,
            "saved user settings"
        );
        Ok(())
    }

    async fn update(&self, patch: SettingsPatch) -> SettingsResult<UserSettings> {
        let database = self.database.clone();
        let next = tokio::task::spawn_blocking(move || {
            database.with_write_tx(|tx| {
                let next = patch.apply_to(read_settings(tx)?.unwrap_or_default());
                next.validate().map_err(SettingsError::Invalid)?;
                write_settings(tx, &next)?;
                Ok::<_, SettingsError>(next)
            })
        })
        .await??;
        tracing::info!(
            sugar_sensitivity = next.sugar_sensitivity,
            sodium_sensitivity = next.sodium_sensitivity,
            vegetarian_emphasis = next.vegetarian_emphasis,
            "updated user settings"
        );
        Ok(next)
    }
}
