//! Manifest artifact: the persisted relative-path → digest mapping.

use crate::error::HarnessError;
use crate::hash::sha256_file;
use crate::select::TrackedFile;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Recorded state of one golden snapshot. `files` is a `BTreeMap` so the
/// serialized artifact has sorted keys and diffs of the artifact itself stay
/// reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Results root the digests were computed against at record time.
    pub results_dir: String,
    /// Forward-slash relative path → hex SHA-256 digest.
    pub files: BTreeMap<String, String>,
}

/// Digest every tracked file and persist the manifest artifact.
///
/// Returns the written manifest so callers can report or cross-check it.
pub fn write_manifest(
    results_dir: &Path,
    files: &[TrackedFile],
    manifest_path: &Path,
) -> Result<Manifest> {
    let mut entries = BTreeMap::new();
    for file in files {
        let digest = sha256_file(&file.path)?;
        entries.insert(file.rel.clone(), digest);
    }
    let manifest = Manifest {
        results_dir: results_dir.display().to_string(),
        files: entries,
    };

    let mut bytes = serde_json::to_vec_pretty(&manifest).context("serialize manifest")?;
    bytes.push(b'\n');
    if let Some(parent) = manifest_path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(manifest_path, bytes)
        .with_context(|| format!("write {}", manifest_path.display()))?;
    Ok(manifest)
}

/// Parse a previously written manifest artifact.
pub fn load_manifest(manifest_path: &Path) -> Result<Manifest> {
    if !manifest_path.is_file() {
        return Err(HarnessError::ManifestMissing(manifest_path.to_path_buf()).into());
    }
    let text = fs::read_to_string(manifest_path)
        .with_context(|| format!("read {}", manifest_path.display()))?;
    let manifest = serde_json::from_str(&text).map_err(|source| HarnessError::ManifestMalformed {
        path: manifest_path.to_path_buf(),
        source,
    })?;
    Ok(manifest)
}
