//! Database migrations
//!
//! Schema creation and migration logic.

use rusqlite::Connection;

use super::connection::DbResult;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all migrations to bring the database up to the current schema version
pub fn run_migrations(conn: &Connection) -> DbResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version = get_schema_version(conn)?;

    if current_version < 1 {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
        tracing::info!(version = 1, "applied schema migration");
    }

    Ok(())
}

/// Migration v1: settings table, seeded with defaults (first install)
fn migrate_v1(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        r#"
        -- ============================================
        -- USER SETTINGS
        -- Single row (id = 1) of personal scoring preferences
        -- ============================================
        CREATE TABLE user_settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            sugar_sensitivity REAL NOT NULL DEFAULT 1.0 CHECK (sugar_sensitivity > 0),
            sodium_sensitivity REAL NOT NULL DEFAULT 1.0 CHECK (sodium_sensitivity > 0),
            vegetarian_emphasis INTEGER NOT NULL DEFAULT 0,   -- boolean
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        INSERT INTO user_settings (id) VALUES (1);
        "#,
    )?;

    Ok(())
}

/// Get the current schema version
pub fn get_schema_version(conn: &Connection) -> DbResult<i32> {
    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}
