//! Comparison of live results against a recorded manifest.

use crate::hash::sha256_file;
use crate::manifest::Manifest;
use anyhow::Result;
use std::fmt;
use std::path::Path;

/// One detected difference between live content and manifest expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    /// Tracked file is absent from the live results.
    Missing { rel: String, expected: String },
    /// Tracked file exists but its content digest differs.
    Changed {
        rel: String,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::Missing { rel, .. } => write!(f, "missing: {rel}"),
            Discrepancy::Changed {
                rel,
                expected,
                actual,
            } => write!(f, "changed: {rel} expected={expected} actual={actual}"),
        }
    }
}

/// Full outcome of one `check`, in manifest key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    pub discrepancies: Vec<Discrepancy>,
}

impl ComparisonReport {
    pub fn is_match(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

/// Recompute the digest of every manifest entry under `results_dir`.
///
/// Never short-circuits: one pass surfaces the full failure surface. Files
/// present in the results directory but absent from the manifest are not
/// inspected; only tracked files participate.
pub fn compare(results_dir: &Path, manifest: &Manifest) -> Result<ComparisonReport> {
    let mut discrepancies = Vec::new();
    for (rel, expected) in &manifest.files {
        let live = results_dir.join(rel);
        if !live.exists() {
            discrepancies.push(Discrepancy::Missing {
                rel: rel.clone(),
                expected: expected.clone(),
            });
            continue;
        }
        let actual = sha256_file(&live)?;
        if actual != *expected {
            discrepancies.push(Discrepancy::Changed {
                rel: rel.clone(),
                expected: expected.clone(),
                actual,
            });
        }
    }
    Ok(ComparisonReport { discrepancies })
}
