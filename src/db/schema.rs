use rusqlite::Connection;

use crate::error::TravelResult;

/// Initialize the packing database schema. Creates tables if they don't exist.
pub fn initialize(conn: &Connection) -> TravelResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS packing_items (
            id TEXT PRIMARY KEY NOT NULL,
            position INTEGER NOT NULL,
            trip TEXT NOT NULL,
            category TEXT NOT NULL,
            name TEXT NOT NULL,
            packed INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_packing_items_trip ON packing_items(trip);
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
