//! Runs component feature files with the custom steps.
//!
//! Exits with status 0 when every selected scenario passes, 1 when the run
//! fails, and 2 when the run cannot start.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use component_steps::{RunnerConfig, default_registry, run};

#[tokio::main]
async fn main() -> ExitCode {
    // Library code logs through `log`; the subscriber picks those records up
    // alongside any `tracing` events.
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    let config = RunnerConfig::new(cli.features)
        .tags(cli.tags)
        .max_concurrent_scenarios(cli.concurrency)
        .fail_fast(cli.fail_fast)
        .fail_on_skipped(cli.fail_on_skipped);

    let registry = match default_registry() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(error = %e, "failed to register steps");
            return ExitCode::from(2);
        }
    };

    match run(&registry, &config).await {
        Ok(report) if report.is_success(config.is_fail_on_skipped()) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "run did not start");
            ExitCode::from(2)
        }
    }
}
