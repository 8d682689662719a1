use rusqlite::Connection;
use std::path::Path;

use crate::utils::error::StoreResult;

pub mod queries;
pub mod schema;

pub fn init_database(db_path: &Path) -> StoreResult<Connection> {
    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    Ok(conn)
}

/// Private in-memory database with the same schema, for tests and the
/// `memory`-backed store when a SQL surface is wanted.
pub fn init_in_memory() -> StoreResult<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> StoreResult<()> {
    // WAL is a no-op for in-memory databases; sqlite reports "memory" back.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    schema::create_tables(conn)?;

    Ok(())
}
