//! SQLite PRAGMA configuration for fixture connections.
//!
//! Must be applied on every connection immediately after opening.

use rusqlite::Connection;

/// Busy timeout in milliseconds.
pub const BUSY_TIMEOUT_MS: u32 = 5000;

/// Configure a fixture connection.
///
/// `foreign_keys` is the one that matters for correctness: without it SQLite
/// accepts out-of-order truncation and the fixture stops mirroring the real
/// database's constraints.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};
        PRAGMA temp_store = MEMORY;
        "
    ))
}
