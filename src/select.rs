//! Deterministic selection of tracked files under a results root.

use anyhow::{anyhow, Context, Result};
use glob::{MatchOptions, Pattern};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// `*` must not cross `/`: `*.routes` selects top-level files only, and
/// subdirectory files are reached by spelling the components
/// (`sub/*.routes`).
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// One tracked file: its absolute location plus the forward-slash relative
/// path that keys it in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    pub path: PathBuf,
    pub rel: String,
}

/// Select the regular files under `root` matching any of `include_globs`.
///
/// Patterns are applied in the given order as discrete selection steps with
/// deduplication across overlapping matches; the final sequence is sorted by
/// relative path, so the result is independent of filesystem iteration
/// order. Patterns match against the forward-slash relative path and may
/// contain directory components (`sub/*.routes`).
pub fn collect_files(root: &Path, include_globs: &[String]) -> Result<Vec<TrackedFile>> {
    let patterns = include_globs
        .iter()
        .map(|raw| Pattern::new(raw).with_context(|| format!("invalid glob pattern '{raw}'")))
        .collect::<Result<Vec<_>>>()?;

    let mut walked = Vec::new();
    walk_regular_files(root, &mut walked)?;
    let mut candidates = Vec::with_capacity(walked.len());
    for path in walked {
        let rel = relative_key(root, &path)?;
        candidates.push((path, rel));
    }

    let mut seen = BTreeSet::new();
    let mut selected = Vec::new();
    for pattern in &patterns {
        for (path, rel) in &candidates {
            if pattern.matches_with(rel, MATCH_OPTIONS) && seen.insert(rel.clone()) {
                selected.push(TrackedFile {
                    path: path.clone(),
                    rel: rel.clone(),
                });
            }
        }
    }

    selected.sort_by(|a, b| a.rel.cmp(&b.rel));
    Ok(selected)
}

/// Relative path from `root` to `path`, joined with forward slashes on
/// every platform. Rejects non-UTF-8 components.
pub fn relative_key(root: &Path, path: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(root)
        .with_context(|| format!("{} is not under {}", path.display(), root.display()))?;
    let parts = rel
        .components()
        .map(|component| {
            component
                .as_os_str()
                .to_str()
                .ok_or_else(|| anyhow!("path {} is not valid UTF-8", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("/"))
}

fn walk_regular_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            walk_regular_files(&path, out)?;
        } else if path.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, content: &[u8]) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn rels(files: &[TrackedFile]) -> Vec<&str> {
        files.iter().map(|f| f.rel.as_str()).collect()
    }

    fn globs(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn selects_only_matching_regular_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "n0.routes", b"a");
        touch(dir.path(), "n1.routes", b"b");
        touch(dir.path(), "trace.pcap", b"noise");
        fs::create_dir(dir.path().join("dir.routes")).unwrap();

        let files = collect_files(dir.path(), &globs(&["*.routes"])).unwrap();
        assert_eq!(rels(&files), ["n0.routes", "n1.routes"]);
    }

    #[test]
    fn output_is_sorted_regardless_of_creation_order() {
        let forward = TempDir::new().unwrap();
        for name in ["a.routes", "b.routes", "c.routes"] {
            touch(forward.path(), name, b"x");
        }
        let backward = TempDir::new().unwrap();
        for name in ["c.routes", "b.routes", "a.routes"] {
            touch(backward.path(), name, b"x");
        }

        let lhs = collect_files(forward.path(), &globs(&["*.routes"])).unwrap();
        let rhs = collect_files(backward.path(), &globs(&["*.routes"])).unwrap();
        assert_eq!(rels(&lhs), ["a.routes", "b.routes", "c.routes"]);
        assert_eq!(rels(&lhs), rels(&rhs));
    }

    #[test]
    fn repeated_invocations_agree() {
        let dir = TempDir::new().unwrap();
        for name in ["z.routes", "m.routes", "a.routes"] {
            touch(dir.path(), name, b"x");
        }

        let first = collect_files(dir.path(), &globs(&["*.routes"])).unwrap();
        let second = collect_files(dir.path(), &globs(&["*.routes"])).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn overlapping_patterns_deduplicate() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.routes", b"x");
        touch(dir.path(), "b.routes", b"y");

        let files = collect_files(dir.path(), &globs(&["*.routes", "a.*"])).unwrap();
        assert_eq!(rels(&files), ["a.routes", "b.routes"]);
    }

    #[test]
    fn patterns_can_reach_subdirectories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.routes", b"x");
        touch(dir.path(), "node0/rib.routes", b"y");
        touch(dir.path(), "node0/rib.pcap", b"noise");

        let files =
            collect_files(dir.path(), &globs(&["*.routes", "node0/*.routes"])).unwrap();
        assert_eq!(rels(&files), ["node0/rib.routes", "top.routes"]);
    }

    #[test]
    fn star_does_not_cross_directory_separator() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "top.routes", b"x");
        touch(dir.path(), "sub/nested.routes", b"y");

        let files = collect_files(dir.path(), &globs(&["*.routes"])).unwrap();
        assert_eq!(rels(&files), ["top.routes"]);
    }

    #[test]
    fn no_match_yields_empty_sequence() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "trace.pcap", b"noise");

        let files = collect_files(dir.path(), &globs(&["*.routes"])).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn relative_keys_use_forward_slashes() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "sub/deep/leaf.routes", b"x");

        let files = collect_files(dir.path(), &globs(&["sub/deep/*.routes"])).unwrap();
        assert_eq!(rels(&files), ["sub/deep/leaf.routes"]);
    }
}
