//! Kanban fixture schema.
//!
//! Mirrors the backend's relational model closely enough to reproduce its
//! foreign-key graph: `card → column → board → user`. No cascading deletes,
//! so removing a parent that still has children is rejected.

use rusqlite::Connection;

pub const KANBAN_SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS "user" (
    id TEXT PRIMARY KEY,
    clerk_id TEXT NOT NULL UNIQUE,
    email TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS board (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    owner_id TEXT NOT NULL REFERENCES "user"(id),
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_board_owner ON board(owner_id);

CREATE TABLE IF NOT EXISTS "column" (
    id TEXT PRIMARY KEY,
    board_id TEXT NOT NULL REFERENCES board(id),
    title TEXT NOT NULL,
    position INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_column_board ON "column"(board_id);

CREATE TABLE IF NOT EXISTS card (
    id TEXT PRIMARY KEY,
    column_id TEXT NOT NULL REFERENCES "column"(id),
    title TEXT NOT NULL,
    description TEXT,
    position INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_card_column ON card(column_id);
"#;

/// Create the fixture tables. Idempotent.
pub fn install_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(KANBAN_SCHEMA_SQL)
}

/// Quote a table name for interpolation (`column` and `user` are keywords).
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Number of rows in `table`.
pub fn row_count(conn: &Connection, table: &str) -> rusqlite::Result<i64> {
    conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", quote_ident(table)),
        [],
        |row| row.get(0),
    )
}
