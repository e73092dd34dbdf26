//! # testbed-fixture
//!
//! Owns the per-worker SQLite database used by integration tests.
//!
//! Lifecycle: `Uninitialized → Connected → (Running)* → Disconnected → FilesRemoved`.
//! - **setup** opens `test-dbs/test-{worker}.db`; failure is fatal
//! - **before each test** every domain table is cleared in [`TruncationOrder`]
//! - **teardown** closes the connection and removes the database plus its
//!   `-journal`, `-wal` and `-shm` sidecars; failures are logged, never returned

pub mod backend;
pub mod cleanup;
pub mod handle;
pub mod lifecycle;
pub mod order;
pub mod pragmas;
pub mod schema;

pub use backend::{FixtureBackend, SqliteBackend};
pub use cleanup::{remove_fixture_files, sweep_orphans, CleanupFailure, CleanupReport, CleanupStep};
pub use handle::TestDatabaseHandle;
pub use lifecycle::{FixtureLifecycle, LifecycleState};
pub use order::TruncationOrder;
