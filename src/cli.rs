//! Command line interface for the `component-steps` binary.
//!
//! Maps arguments onto a [`RunnerConfig`](component_steps::RunnerConfig).
//! The build script includes this file on its own to render a man page, so
//! it depends on nothing but `clap` and `std`.

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for the `component-steps` binary.
#[derive(Debug, Parser)]
#[command(
    name = "component-steps",
    version,
    about = "Run component feature files with the custom steps"
)]
pub struct Cli {
    /// Feature file or directory of feature files.
    #[arg(default_value = "tests/features")]
    pub features: PathBuf,

    /// Only run scenarios carrying this tag. May be repeated.
    #[arg(short, long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Maximum number of scenarios run at once.
    #[arg(short, long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Stop after the first failed scenario.
    #[arg(long)]
    pub fail_fast: bool,

    /// Fail the run if any step is skipped.
    #[arg(long)]
    pub fail_on_skipped: bool,
}
