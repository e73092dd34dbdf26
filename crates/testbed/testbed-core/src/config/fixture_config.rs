//! Fixture configuration: where worker databases live and how to reset them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DB_DIR, DEFAULT_WORKER_ID, DEFAULT_WORKER_ID_ENV, KANBAN_TRUNCATION_ORDER,
};
use crate::types::WorkerId;

/// `[fixture]` section of `testbed.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FixtureConfig {
    /// Directory holding `test-{worker}.db` files. Default: `test-dbs`.
    pub db_dir: Option<PathBuf>,
    /// Worker id used when no environment variable provides one. Default: `"1"`.
    pub fallback_worker_id: Option<String>,
    /// Environment variables checked in order for the worker id.
    pub worker_id_env: Option<Vec<String>>,
    /// Tables to clear before each test. Replaces the built-in
    /// `card, column, board, user` order entirely, so an override must still
    /// list the deepest foreign-key dependent first and every parent after
    /// all of its children. Only the names are validated, not the order; a
    /// wrong order surfaces as a truncation failure in the first test.
    pub truncation_order: Option<Vec<String>>,
}

impl FixtureConfig {
    pub fn effective_db_dir(&self) -> PathBuf {
        self.db_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_DIR))
    }

    pub fn effective_fallback_worker_id(&self) -> WorkerId {
        self.fallback_worker_id
            .as_deref()
            .and_then(|id| WorkerId::new(id).ok())
            .unwrap_or_default()
    }

    pub fn effective_worker_id_env(&self) -> Vec<String> {
        self.worker_id_env.clone().unwrap_or_else(|| {
            DEFAULT_WORKER_ID_ENV.iter().map(|s| s.to_string()).collect()
        })
    }

    pub fn effective_truncation_order(&self) -> Vec<String> {
        self.truncation_order.clone().unwrap_or_else(|| {
            KANBAN_TRUNCATION_ORDER.iter().map(|s| s.to_string()).collect()
        })
    }

    /// Resolve the worker id from the process environment.
    ///
    /// This is the only place the harness reads ambient state for the worker
    /// id; everything downstream takes a `WorkerId` explicitly.
    pub fn resolve_worker_id(&self) -> WorkerId {
        self.resolve_worker_id_with(|key| std::env::var(key).ok())
    }

    /// Same as [`resolve_worker_id`](Self::resolve_worker_id) with an
    /// injectable variable lookup.
    pub fn resolve_worker_id_with<F>(&self, lookup: F) -> WorkerId
    where
        F: Fn(&str) -> Option<String>,
    {
        for key in self.effective_worker_id_env() {
            let Some(raw) = lookup(&key) else { continue };
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            match WorkerId::new(raw) {
                Ok(id) => return id,
                Err(e) => tracing::warn!(env = %key, error = %e, "ignoring worker id from environment"),
            }
        }
        let fallback = self.effective_fallback_worker_id();
        tracing::debug!(worker_id = %fallback, default = DEFAULT_WORKER_ID, "no worker id in environment, using fallback");
        fallback
    }
}
