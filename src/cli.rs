//! CLI argument parsing for the characterization harness.
//!
//! The CLI is intentionally thin: it builds one explicit `HarnessConfig`
//! and hands it to the workflow, so no component below this layer touches
//! process-ambient path state.

use crate::config::{HarnessConfig, DEFAULT_EXAMPLE, DEFAULT_RESULTS_REL};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Operation to perform against the golden snapshot.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Overwrite the golden snapshot with this run's outputs
    Record,
    /// Compare this run's outputs against the golden snapshot
    Check,
}

#[derive(Parser, Debug)]
#[command(
    name = "simchar",
    version,
    about = "Characterization-test runner for simulation outputs",
    after_help = "Exit codes:\n  0  recorded, or check passed\n  1  check found discrepancies\n  2  setup error (no matching files, missing manifest, results dir not found)\n\nExamples:\n  simchar record\n  simchar check\n  simchar check --example ospf-two-nodes --rng-run 1\n  simchar record --extra-args --interval=5 --stop=60"
)]
pub struct Cli {
    /// record = overwrite golden snapshot; check = compare against it
    #[arg(value_enum)]
    pub mode: Mode,

    /// Example program name (as used by waf --run)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_EXAMPLE)]
    pub example: String,

    /// Relative results directory produced by the example
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RESULTS_REL)]
    pub results_rel: PathBuf,

    /// RngRun value to make randomness deterministic
    #[arg(long, value_name = "N", default_value = "1")]
    pub rng_run: String,

    /// Module root holding test/golden (defaults to the current directory)
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub module_root: PathBuf,

    /// Simulator root where the build tool lives (defaults to two levels
    /// above the module root)
    #[arg(long, value_name = "DIR")]
    pub sim_root: Option<PathBuf>,

    /// Extra args passed to the example verbatim
    #[arg(long, value_name = "ARG", num_args = 0.., allow_hyphen_values = true)]
    pub extra_args: Vec<String>,
}

impl Cli {
    /// Resolve the parsed arguments into the one config object every
    /// component receives.
    pub fn into_config(self) -> (Mode, HarnessConfig) {
        let mode = self.mode;
        let cfg = HarnessConfig::new(
            self.module_root,
            self.sim_root,
            self.example,
            self.results_rel,
            self.rng_run,
            self.extra_args,
        );
        (mode, cfg)
    }
}
