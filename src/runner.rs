//! Runs feature files against registered steps.

use std::path::PathBuf;

use cucumber::{World as _, writer::Stats as _};
use log::{info, warn};
use thiserror::Error;

use crate::{
    config::RunnerConfig,
    error::RegistryError,
    registry::StepRegistry,
    world::ComponentWorld,
};

/// Errors that stop a run from starting.
///
/// Failing scenarios are not errors; they are counted in [`RunReport`].
#[derive(Debug, Error)]
pub enum RunError {
    /// The configured feature path does not exist.
    #[error("feature path {} does not exist", .0.display())]
    MissingFeatures(PathBuf),
    /// The step registry could not be converted for the runner.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Step-level outcome of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Steps that passed.
    pub passed: usize,
    /// Steps that were skipped, including undefined ones.
    pub skipped: usize,
    /// Steps that failed.
    pub failed: usize,
    /// Feature files that could not be parsed.
    pub parsing_errors: usize,
    /// Scenario hooks that failed.
    pub hook_errors: usize,
}

impl RunReport {
    /// Returns `true` if nothing failed. Skipped steps count as failures when
    /// `fail_on_skipped` is set.
    #[must_use]
    pub fn is_success(&self, fail_on_skipped: bool) -> bool {
        self.failed == 0
            && self.parsing_errors == 0
            && self.hook_errors == 0
            && !(fail_on_skipped && self.skipped > 0)
    }
}

/// Run the configured feature files with the steps in `registry`.
///
/// Each scenario gets a fresh [`ComponentWorld`]. Command-line arguments of
/// the current process are not parsed by the runner.
///
/// # Errors
///
/// Returns [`RunError::MissingFeatures`] if the feature path does not exist
/// and [`RunError::Registry`] if the registry cannot be converted.
pub async fn run(
    registry: &StepRegistry<ComponentWorld>,
    config: &RunnerConfig,
) -> Result<RunReport, RunError> {
    let features = config.features().to_path_buf();
    if !features.exists() {
        return Err(RunError::MissingFeatures(features));
    }

    let mut cucumber = ComponentWorld::cucumber::<PathBuf>()
        .steps(registry.collection()?)
        .max_concurrent_scenarios(config.concurrency())
        .with_default_cli();
    if config.is_fail_fast() {
        cucumber = cucumber.fail_fast();
    }

    info!(
        "running features: path={}, steps={}",
        features.display(),
        registry.len()
    );
    let filter = config.tag_filter().clone();
    let writer = cucumber
        .filter_run(features, move |feature, rule, scenario| {
            filter.selects(feature, rule, scenario)
        })
        .await;

    let report = RunReport {
        passed: writer.passed_steps(),
        skipped: writer.skipped_steps(),
        failed: writer.failed_steps(),
        parsing_errors: writer.parsing_errors(),
        hook_errors: writer.hook_errors(),
    };
    if report.is_success(config.is_fail_on_skipped()) {
        info!("run finished: {report:?}");
    } else {
        warn!("run failed: {report:?}");
    }
    Ok(report)
}
