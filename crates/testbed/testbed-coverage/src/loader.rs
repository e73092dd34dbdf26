//! Reading coverage artifacts from disk.
//!
//! A missing file means that side has not run yet and yields `Ok(None)`.
//! A file that exists but does not parse is fatal for the report.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use testbed_core::constants::{MARKER_NO_DATA, MARKER_PARSE_ERROR};
use testbed_core::errors::{CoverageError, CoverageResult};

use crate::artifact::{HitMapArtifact, SummaryArtifact};

pub fn load_summary(path: &Path) -> CoverageResult<Option<SummaryArtifact>> {
    load_json(path, "summary")
}

pub fn load_hitmap(path: &Path) -> CoverageResult<Option<HitMapArtifact>> {
    load_json(path, "hit map")
}

fn load_json<T: DeserializeOwned>(path: &Path, artifact: &'static str) -> CoverageResult<Option<T>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(artifact, path = %path.display(), "{MARKER_NO_DATA} coverage artifact not found");
            return Ok(None);
        }
        Err(source) => {
            return Err(CoverageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match serde_json::from_str(&raw) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(source) => {
            tracing::error!(artifact, path = %path.display(), error = %source, "{MARKER_PARSE_ERROR} malformed coverage artifact");
            Err(CoverageError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
