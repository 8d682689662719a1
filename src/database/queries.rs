use rusqlite::{Connection, OptionalExtension};

use crate::utils::error::StoreResult;

pub fn read_value(conn: &Connection, key: &str) -> StoreResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;

    Ok(value)
}

pub fn write_value(conn: &Connection, key: &str, value: &str) -> StoreResult<()> {
    let now = chrono::Utc::now().timestamp();

    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        rusqlite::params![key, value, now],
    )?;

    Ok(())
}

pub fn list_keys(conn: &Connection, prefix: &str) -> StoreResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT key FROM kv_store WHERE substr(key, 1, length(?1)) = ?1 ORDER BY key",
    )?;

    let keys = stmt
        .query_map([prefix], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;

    Ok(keys)
}
