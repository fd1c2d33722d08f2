//! Fatal error taxonomy for the harness.
//!
//! All of these abort the operation before the golden snapshot is mutated
//! and map to exit code 2. A verification mismatch is not an error; it is
//! reported through [`crate::compare::ComparisonReport`] and exit code 1.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// The external run exited nonzero. Fatal, never retried.
    #[error("external run failed: `{program}` exited with {status}")]
    ExternalRunFailed { program: String, status: String },

    /// None of the candidate results roots exists.
    #[error("could not find results dir '{}' under any of: {}", .rel.display(), format_candidates(.candidates))]
    ResultsDirectoryNotFound {
        rel: PathBuf,
        candidates: Vec<PathBuf>,
    },

    /// The inclusion patterns matched nothing; an empty snapshot is never
    /// meaningful.
    #[error("no files matched {patterns:?} in {}", .dir.display())]
    NoTrackedFilesMatched {
        patterns: Vec<String>,
        dir: PathBuf,
    },

    /// `check` was requested before any `record`.
    #[error("missing manifest at {}; run with mode=record first", .0.display())]
    ManifestMissing(PathBuf),

    /// The manifest artifact exists but cannot be parsed.
    #[error("malformed manifest at {}: {source}", .path.display())]
    ManifestMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|c| format!("'{}'", c.display()))
        .collect::<Vec<_>>()
        .join(", ")
}
