//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, TestbedErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

impl TestbedErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } => error_code::CONFIG_READ_ERROR,
            Self::Parse { .. } => error_code::CONFIG_PARSE_ERROR,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}
