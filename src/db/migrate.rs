use rusqlite::Connection;

use crate::error::Result;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS food_entries (
            seq        INTEGER PRIMARY KEY AUTOINCREMENT,
            id         INTEGER NOT NULL UNIQUE,
            name       TEXT NOT NULL,
            category   TEXT NOT NULL,
            time       TEXT NOT NULL,
            calories   REAL NOT NULL,
            protein    REAL NOT NULL,
            carbs      REAL NOT NULL,
            fats       REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS kv_store (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );",
    )?;
    Ok(())
}
