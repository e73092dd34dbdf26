//! Top-level configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CoverageConfig, FixtureConfig};
use crate::errors::ConfigError;

/// Root of `testbed.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TestbedConfig {
    pub fixture: FixtureConfig,
    pub coverage: CoverageConfig,
}

impl TestbedConfig {
    /// Load config from `path`. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the harness misbehave rather than fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(order) = &self.fixture.truncation_order {
            if order.is_empty() {
                return Err(ConfigError::Invalid {
                    field: "fixture.truncation_order",
                    message: "must name at least one table".to_string(),
                });
            }
            if let Some(bad) = order.iter().find(|t| !is_identifier(t)) {
                return Err(ConfigError::Invalid {
                    field: "fixture.truncation_order",
                    message: format!("{bad:?} is not a plain table name"),
                });
            }
        }
        if let Some(id) = &self.fixture.fallback_worker_id {
            if let Err(e) = crate::WorkerId::new(id.clone()) {
                return Err(ConfigError::Invalid {
                    field: "fixture.fallback_worker_id",
                    message: e.to_string(),
                });
            }
        }
        if self.coverage.weakest_limit == Some(0) {
            return Err(ConfigError::Invalid {
                field: "coverage.weakest_limit",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
