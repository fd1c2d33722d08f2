use clap::Parser;
use sim_characterize::cli::{Cli, Mode};
use sim_characterize::run::WafRunner;
use sim_characterize::workflow::{run_check, run_record};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code for a verification mismatch; setup and hard errors use 2.
const EXIT_MISMATCH: u8 = 1;
const EXIT_SETUP: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (mode, cfg) = Cli::parse().into_config();
    let runner = WafRunner;

    match mode {
        Mode::Record => match run_record(&cfg, &runner) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err:#}");
                ExitCode::from(EXIT_SETUP)
            }
        },
        Mode::Check => match run_check(&cfg, &runner) {
            Ok(report) if report.is_match() => {
                println!("ok: outputs match golden snapshot");
                ExitCode::SUCCESS
            }
            Ok(report) => {
                eprintln!("FAILED: outputs differ from golden snapshot");
                for discrepancy in &report.discrepancies {
                    eprintln!(" - {discrepancy}");
                }
                ExitCode::from(EXIT_MISMATCH)
            }
            Err(err) => {
                eprintln!("error: {err:#}");
                ExitCode::from(EXIT_SETUP)
            }
        },
    }
}
