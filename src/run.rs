//! External run invocation through the simulator's build tool.

use crate::error::HarnessError;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Narrow collaborator interface over the external executor, so the
/// orchestration logic can be exercised with a fake that never launches a
/// real process. Implementations block until the run terminates and return
/// `Ok(())` only on exit code zero.
pub trait Runner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()>;
}

/// Real runner: invokes `<cwd>/waf --run "<program> <args...>"` with the
/// simulator root as working directory. The build tool expects the program
/// and its arguments joined into a single `--run` value.
pub struct WafRunner;

impl Runner for WafRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<()> {
        let waf = cwd.join("waf");
        let run_spec = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(program, cwd = %cwd.display(), "[run] {} --run {run_spec}", waf.display());

        let status = Command::new(&waf)
            .arg("--run")
            .arg(&run_spec)
            .current_dir(cwd)
            .status()
            .with_context(|| format!("spawn {}", waf.display()))?;

        if !status.success() {
            return Err(HarnessError::ExternalRunFailed {
                program: program.to_string(),
                status: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
