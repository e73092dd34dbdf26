//! Shared helpers for fixture integration tests.

use std::path::Path;

use rusqlite::Connection;
use testbed_core::WorkerId;
use testbed_fixture::TestDatabaseHandle;

pub fn handle(dir: &Path, id: &str) -> TestDatabaseHandle {
    TestDatabaseHandle::new(dir, WorkerId::new(id).unwrap())
}

/// One user owning one board with one column holding two cards.
pub fn seed_board(conn: &Connection) {
    conn.execute_batch(
        r#"
        INSERT INTO "user" (id, clerk_id, email) VALUES ('u1', 'clerk_u1', 'u1@example.com');
        INSERT INTO board (id, title, owner_id) VALUES ('b1', 'Sprint', 'u1');
        INSERT INTO "column" (id, board_id, title, position) VALUES ('c1', 'b1', 'Todo', 0);
        INSERT INTO card (id, column_id, title, position) VALUES ('k1', 'c1', 'Write tests', 0);
        INSERT INTO card (id, column_id, title, position) VALUES ('k2', 'c1', 'Fix flake', 1);
        "#,
    )
    .unwrap();
}

pub fn count(conn: &Connection, table: &str) -> i64 {
    testbed_fixture::schema::row_count(conn, table).unwrap()
}
