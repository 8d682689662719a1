use rusqlite::Connection;

use crate::utils::error::StoreResult;

pub fn create_tables(conn: &Connection) -> StoreResult<()> {
    // One row per logical key; the entry collection is a single JSON value.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}
