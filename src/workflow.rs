//! Orchestration of the `record` and `check` operations.

use crate::compare::{self, ComparisonReport};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::locate::find_results_dir;
use crate::manifest::{load_manifest, write_manifest};
use crate::run::Runner;
use crate::select::{collect_files, TrackedFile};
use crate::snapshot::write_snapshot;
use anyhow::Result;
use std::path::PathBuf;

/// Run the external program, locate its outputs, and select the tracked
/// files. Shared front half of both operations; fails before any snapshot
/// state is touched.
fn produce_and_select(
    cfg: &HarnessConfig,
    runner: &dyn Runner,
) -> Result<(PathBuf, Vec<TrackedFile>)> {
    runner.run(&cfg.example, &cfg.program_args(), &cfg.sim_root)?;

    let results_dir = find_results_dir(&cfg.results_rel, &cfg.results_candidates())?;
    tracing::debug!(results_dir = %results_dir.display(), "located results");

    let files = collect_files(&results_dir, &cfg.include_globs)?;
    if files.is_empty() {
        return Err(HarnessError::NoTrackedFilesMatched {
            patterns: cfg.include_globs.clone(),
            dir: results_dir,
        }
        .into());
    }
    tracing::debug!(count = files.len(), "selected tracked files");
    Ok((results_dir, files))
}

/// Overwrite the golden snapshot with the current run's tracked outputs.
///
/// The manifest is written against the stored copies, so recorded digests
/// reflect what was actually kept, not the transient live files.
pub fn run_record(cfg: &HarnessConfig, runner: &dyn Runner) -> Result<()> {
    let (_results_dir, files) = produce_and_select(cfg, runner)?;

    let golden_root = cfg.golden_root();
    write_snapshot(&files, &golden_root)?;
    let stored = collect_files(&golden_root, &cfg.include_globs)?;
    write_manifest(&golden_root, &stored, &cfg.manifest_path())?;

    println!("recorded golden snapshot: {}", golden_root.display());
    println!("manifest: {}", cfg.manifest_path().display());
    Ok(())
}

/// Compare the current run's tracked outputs against the recorded manifest.
///
/// Requires a prior `record`; the caller maps the returned report to exit
/// code 0 or 1.
pub fn run_check(cfg: &HarnessConfig, runner: &dyn Runner) -> Result<ComparisonReport> {
    let (results_dir, _files) = produce_and_select(cfg, runner)?;

    let manifest = load_manifest(&cfg.manifest_path())?;
    compare::compare(&results_dir, &manifest)
}
