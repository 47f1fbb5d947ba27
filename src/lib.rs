//! Custom cucumber steps for component end-to-end tests.
//!
//! The crate registers the component's custom step, `"I call my custom
//! step"`, with a scenario-scoped cucumber runner. Extend
//! [`custom::CustomSteps`] with verification logic for your component and
//! register further [`StepDefinition`]s in [`default_registry`].

pub mod config;
pub mod custom;
pub mod error;
pub mod metrics;
pub mod output;
pub mod panic;
pub mod registry;
pub mod runner;
pub mod world;

pub use config::{RunnerConfig, TagFilter};
pub use custom::{CUSTOM_STEP_MESSAGE, CUSTOM_STEP_PATTERN, CallCustomStep, CustomSteps};
pub use error::{DispatchError, RegistryError, StepError};
pub use output::{CapturedOutput, StepOutput, Stdout};
pub use registry::{StepDefinition, StepKeyword, StepRegistry};
pub use runner::{RunError, RunReport, run};
pub use world::ComponentWorld;

/// Registry holding every step the component provides.
///
/// # Errors
///
/// Returns a [`RegistryError`] if two of the component's steps collide.
pub fn default_registry() -> Result<StepRegistry<ComponentWorld>, RegistryError> {
    let mut registry = StepRegistry::new();
    registry.register::<CallCustomStep>()?;
    Ok(registry)
}
