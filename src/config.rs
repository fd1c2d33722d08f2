//! Explicit path configuration for one harness invocation.
//!
//! Built once at startup from CLI arguments and passed into every component;
//! nothing below this layer recomputes roots from ambient process state.

use std::path::PathBuf;

/// Default example program driven by the build tool.
pub const DEFAULT_EXAMPLE: &str = "ospf-two-nodes";

/// Default relative directory where the example deposits its outputs.
pub const DEFAULT_RESULTS_REL: &str = "results/ospf-two-nodes";

/// Only route tables are tracked; pcap and ascii traces are too noisy to
/// characterize byte-for-byte.
pub const DEFAULT_INCLUDE_GLOBS: &[&str] = &["*.routes"];

/// Paths and run parameters for a single `record` or `check` invocation.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Root of the simulation module; the golden snapshot lives under it.
    pub module_root: PathBuf,
    /// Root of the simulator tree; the build tool runs here and outputs
    /// land under it (or under its `build/` subdirectory).
    pub sim_root: PathBuf,
    /// Example program name as understood by the build tool.
    pub example: String,
    /// Relative directory the example writes its outputs to.
    pub results_rel: PathBuf,
    /// Seed argument forwarded to the example for deterministic randomness.
    pub rng_run: String,
    /// Extra arguments forwarded verbatim to the example.
    pub extra_args: Vec<String>,
    /// Ordered glob inclusion patterns selecting the tracked files.
    pub include_globs: Vec<String>,
}

impl HarnessConfig {
    /// Build a config from explicit roots. When `sim_root` is absent it
    /// defaults to two levels above the module root, matching the layout
    /// `<sim-root>/contrib/<module>`.
    pub fn new(
        module_root: PathBuf,
        sim_root: Option<PathBuf>,
        example: String,
        results_rel: PathBuf,
        rng_run: String,
        extra_args: Vec<String>,
    ) -> Self {
        let sim_root = sim_root.unwrap_or_else(|| module_root.join("..").join(".."));
        Self {
            module_root,
            sim_root,
            example,
            results_rel,
            rng_run,
            extra_args,
            include_globs: DEFAULT_INCLUDE_GLOBS
                .iter()
                .map(|g| (*g).to_string())
                .collect(),
        }
    }

    /// Golden snapshot directory for the configured example.
    pub fn golden_root(&self) -> PathBuf {
        self.module_root
            .join("test")
            .join("golden")
            .join(&self.example)
    }

    /// Manifest artifact inside the golden snapshot.
    pub fn manifest_path(&self) -> PathBuf {
        self.golden_root().join("manifest.json")
    }

    /// Candidate results roots in resolution order. The build tool does not
    /// document where outputs land, so both the simulator root and its
    /// `build/` subtree are probed; the first existing directory wins.
    pub fn results_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.sim_root.join(&self.results_rel),
            self.sim_root.join("build").join(&self.results_rel),
        ]
    }

    /// Argument list forwarded to the example program: the deterministic
    /// seed first, then any caller-supplied extras verbatim.
    pub fn program_args(&self) -> Vec<String> {
        let mut args = vec![format!("--RngRun={}", self.rng_run)];
        args.extend(self.extra_args.iter().cloned());
        args
    }
}
