//! `FixtureBackend`: connection hooks the lifecycle drives.
//!
//! The backend under test only has to provide `connect`, `truncate` and
//! `disconnect`; `SqliteBackend` is the rusqlite implementation.

use std::path::Path;

use rusqlite::Connection;
use testbed_core::errors::{FixtureError, FixtureResult};

use crate::pragmas::configure_connection;
use crate::schema::{install_schema, quote_ident};

/// Connection lifecycle hooks for one worker's test database.
pub trait FixtureBackend {
    /// Open the database at `path`. Called once, before any test.
    fn connect(&mut self, path: &Path) -> FixtureResult<()>;

    /// Delete every row of `table`. Must succeed on an empty table.
    fn truncate(&mut self, table: &str) -> FixtureResult<()>;

    /// Release the connection. Calling it while disconnected is a no-op.
    fn disconnect(&mut self) -> FixtureResult<()>;

    fn is_connected(&self) -> bool;
}

/// rusqlite-backed fixture connection.
///
/// Installs the Kanban schema on connect unless built with
/// [`SqliteBackend::without_schema`].
#[derive(Debug)]
pub struct SqliteBackend {
    conn: Option<Connection>,
    install_schema: bool,
}

impl SqliteBackend {
    pub fn new() -> Self {
        Self {
            conn: None,
            install_schema: true,
        }
    }

    /// For databases whose schema is created by the application's own migrations.
    pub fn without_schema() -> Self {
        Self {
            conn: None,
            install_schema: false,
        }
    }

    /// The open connection, for tests to seed and query through.
    pub fn connection(&self) -> FixtureResult<&Connection> {
        self.conn.as_ref().ok_or(FixtureError::NotConnected)
    }
}

impl Default for SqliteBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureBackend for SqliteBackend {
    fn connect(&mut self, path: &Path) -> FixtureResult<()> {
        if self.conn.is_some() {
            return Ok(());
        }
        let setup_err = |e: rusqlite::Error| FixtureError::Setup {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        let conn = Connection::open(path).map_err(setup_err)?;
        configure_connection(&conn).map_err(setup_err)?;
        if self.install_schema {
            install_schema(&conn).map_err(|e| FixtureError::Schema {
                message: e.to_string(),
            })?;
        }
        self.conn = Some(conn);
        Ok(())
    }

    fn truncate(&mut self, table: &str) -> FixtureResult<()> {
        let conn = self.connection()?;
        let deleted = conn
            .execute(&format!("DELETE FROM {}", quote_ident(table)), [])
            .map_err(|e| FixtureError::Truncation {
                table: table.to_string(),
                message: e.to_string(),
            })?;
        tracing::trace!(table, deleted, "table truncated");
        Ok(())
    }

    fn disconnect(&mut self) -> FixtureResult<()> {
        match self.conn.take() {
            Some(conn) => conn.close().map_err(|(_, e)| FixtureError::Disconnect {
                message: e.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn is_connected(&self) -> bool {
        self.conn.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_requires_connection() {
        let mut backend = SqliteBackend::new();
        let err = backend.truncate("card").unwrap_err();
        assert!(matches!(err, FixtureError::NotConnected));
    }

    #[test]
    fn truncate_empty_table_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SqliteBackend::new();
        backend.connect(&dir.path().join("t.db")).unwrap();
        backend.truncate("card").unwrap();
        backend.truncate("card").unwrap();
    }

    #[test]
    fn truncate_unknown_table_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SqliteBackend::new();
        backend.connect(&dir.path().join("t.db")).unwrap();
        let err = backend.truncate("no_such_table").unwrap_err();
        assert!(matches!(err, FixtureError::Truncation { ref table, .. } if table == "no_such_table"));
    }

    #[test]
    fn disconnect_twice_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SqliteBackend::new();
        backend.connect(&dir.path().join("t.db")).unwrap();
        assert!(backend.is_connected());
        backend.disconnect().unwrap();
        backend.disconnect().unwrap();
        assert!(!backend.is_connected());
    }

    #[test]
    fn connect_into_missing_directory_fails_as_setup_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = SqliteBackend::new();
        let err = backend
            .connect(&dir.path().join("missing").join("t.db"))
            .unwrap_err();
        assert!(matches!(err, FixtureError::Setup { .. }));
    }
}
