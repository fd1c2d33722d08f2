//! Snapshot engine for characterization-testing a deterministic simulation.
//!
//! The binary drives a record/check loop: run the simulation through the
//! external build tool, locate its output directory, select the tracked
//! files, then either record them as the golden snapshot or compare them
//! against the previously recorded manifest.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod hash;
pub mod locate;
pub mod manifest;
pub mod run;
pub mod select;
pub mod snapshot;
pub mod workflow;

pub use compare::{ComparisonReport, Discrepancy};
pub use config::HarnessConfig;
pub use error::HarnessError;
pub use manifest::Manifest;
pub use run::Runner;
