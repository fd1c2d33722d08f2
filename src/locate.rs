//! Results directory resolution.

use crate::error::HarnessError;
use std::path::{Path, PathBuf};

/// Return the first candidate that exists and is a directory.
///
/// Order encodes convention: the build tool may deposit outputs under the
/// simulator root or under its `build/` subtree, and the earlier candidate
/// wins even when both exist.
pub fn find_results_dir(rel: &Path, candidates: &[PathBuf]) -> Result<PathBuf, HarnessError> {
    for candidate in candidates {
        if candidate.is_dir() {
            return Ok(candidate.clone());
        }
    }
    Err(HarnessError::ResultsDirectoryNotFound {
        rel: rel.to_path_buf(),
        candidates: candidates.to_vec(),
    })
}
