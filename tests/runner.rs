//! Runs feature files through the library runner and checks the reports.

#[path = "steps/mod.rs"]
mod steps;

use component_steps::{ComponentWorld, RunReport, RunnerConfig, StepRegistry, default_registry, run};
use rstest::{fixture, rstest};

const FEATURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/features");
const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

#[fixture]
fn registry() -> StepRegistry<ComponentWorld> {
    let mut registry = default_registry().expect("default registry");
    steps::register(&mut registry).expect("verification steps");
    registry
}

async fn run_features(registry: &StepRegistry<ComponentWorld>, config: RunnerConfig) -> RunReport {
    run(registry, &config).await.expect("run features")
}

#[rstest]
#[tokio::test]
async fn all_custom_step_scenarios_pass(registry: StepRegistry<ComponentWorld>) {
    let report = run_features(&registry, RunnerConfig::new(FEATURES)).await;
    assert!(report.is_success(true), "{report:?}");
    assert_eq!(report.passed, 13, "{report:?}");
}

#[rstest]
#[tokio::test]
async fn scenarios_pass_one_at_a_time(registry: StepRegistry<ComponentWorld>) {
    let config = RunnerConfig::new(FEATURES).max_concurrent_scenarios(1);
    let report = run_features(&registry, config).await;
    assert!(report.is_success(true), "{report:?}");
    assert_eq!(report.passed, 13, "{report:?}");
}

#[rstest]
#[tokio::test]
async fn tags_select_scenarios(registry: StepRegistry<ComponentWorld>) {
    let config = RunnerConfig::new(FEATURES).tags(["@smoke"]);
    let report = run_features(&registry, config).await;
    assert_eq!(
        report,
        RunReport {
            passed: 2,
            ..RunReport::default()
        }
    );
}

#[rstest]
#[tokio::test]
async fn undefined_steps_are_skipped(registry: StepRegistry<ComponentWorld>) {
    let config = RunnerConfig::new(format!("{FIXTURES}/undefined_step.feature"));
    let report = run_features(&registry, config).await;
    assert_eq!(report.failed, 0, "{report:?}");
    assert_eq!(report.skipped, 1, "{report:?}");
    assert!(report.is_success(false));
    assert!(!report.is_success(true));
}

#[rstest]
#[tokio::test]
async fn failed_verification_fails_the_run(registry: StepRegistry<ComponentWorld>) {
    let config = RunnerConfig::new(format!("{FIXTURES}/failing_step.feature"));
    let report = run_features(&registry, config).await;
    assert_eq!(report.passed, 2, "{report:?}");
    assert_eq!(report.failed, 1, "{report:?}");
    assert!(!report.is_success(false));
}
