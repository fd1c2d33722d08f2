//! Golden snapshot replacement.

use crate::select::TrackedFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Replace the golden tree with copies of the selected files.
///
/// The destination is removed and recreated, then every file is copied
/// preserving its relative path. A failure mid-copy leaves an incomplete
/// snapshot; the operator re-runs `record`. Digests are computed afterwards
/// from the stored copies, never from the transient live files.
pub fn write_snapshot(files: &[TrackedFile], golden_root: &Path) -> Result<()> {
    if golden_root.exists() {
        fs::remove_dir_all(golden_root)
            .with_context(|| format!("remove {}", golden_root.display()))?;
    }
    fs::create_dir_all(golden_root)
        .with_context(|| format!("create {}", golden_root.display()))?;

    for file in files {
        let dest = golden_root.join(&file.rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
        fs::copy(&file.path, &dest).with_context(|| {
            format!("copy {} to {}", file.path.display(), dest.display())
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::collect_files;
    use tempfile::TempDir;

    fn globs() -> Vec<String> {
        vec!["*.routes".to_string(), "*/*.routes".to_string()]
    }

    #[test]
    fn copies_preserve_relative_structure() {
        let dir = TempDir::new().unwrap();
        let results = dir.path().join("results");
        fs::create_dir_all(results.join("node0")).unwrap();
        fs::write(results.join("a.routes"), b"X").unwrap();
        fs::write(results.join("node0").join("b.routes"), b"Y").unwrap();

        let files = collect_files(&results, &globs()).unwrap();
        let golden = dir.path().join("golden");
        write_snapshot(&files, &golden).unwrap();

        assert_eq!(fs::read(golden.join("a.routes")).unwrap(), b"X");
        assert_eq!(fs::read(golden.join("node0/b.routes")).unwrap(), b"Y");
    }

    #[test]
    fn replaces_any_prior_snapshot_contents() {
        let dir = TempDir::new().unwrap();
        let results = dir.path().join("results");
        fs::create_dir_all(&results).unwrap();
        fs::write(results.join("fresh.routes"), b"new").unwrap();

        let golden = dir.path().join("golden");
        fs::create_dir_all(&golden).unwrap();
        fs::write(golden.join("stale.routes"), b"old").unwrap();

        let files = collect_files(&results, &globs()).unwrap();
        write_snapshot(&files, &golden).unwrap();

        assert!(!golden.join("stale.routes").exists());
        assert_eq!(fs::read(golden.join("fresh.routes")).unwrap(), b"new");
    }
}
