//! Constants shared across the harness crates.

/// Directory (relative to the repository root) holding per-worker databases.
pub const DEFAULT_DB_DIR: &str = "test-dbs";

/// Worker id used when the test runner does not provide one.
pub const DEFAULT_WORKER_ID: &str = "1";

/// Environment variables consulted, in order, for the worker id.
pub const DEFAULT_WORKER_ID_ENV: &[&str] = &["TESTBED_WORKER_ID", "VITEST_POOL_ID"];

/// Suffixes of the files SQLite keeps next to a database file.
pub const SIDECAR_SUFFIXES: [&str; 3] = ["-journal", "-wal", "-shm"];

/// Domain tables, deepest foreign-key dependent first.
pub const KANBAN_TRUNCATION_ORDER: [&str; 4] = ["card", "column", "board", "user"];

/// Default location of the backend's pre-aggregated coverage summary.
pub const DEFAULT_SUMMARY_PATH: &str = "backend/coverage/coverage-summary.json";

/// Default location of the frontend's raw per-file hit map.
pub const DEFAULT_HITMAP_PATH: &str = "frontend/coverage/coverage-final.json";

/// Only hit-map entries whose path contains this segment are counted.
pub const DEFAULT_INCLUDE_MARKER: &str = "frontend/src/";

/// Length of the "weakest files" listing.
pub const DEFAULT_WEAKEST_LIMIT: usize = 5;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "testbed.toml";

/// Log prefix for best-effort cleanup failures.
pub const MARKER_CLEANUP_FAILED: &str = "[cleanup-failed]";

/// Log prefix for coverage artifacts that have not been produced yet.
pub const MARKER_NO_DATA: &str = "[no-data]";

/// Log prefix for coverage artifacts that exist but cannot be parsed.
pub const MARKER_PARSE_ERROR: &str = "[parse-error]";
