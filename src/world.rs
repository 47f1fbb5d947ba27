//! Scenario state for component tests.
//!
//! The cucumber runner builds a fresh [`ComponentWorld`] for every scenario
//! and drops it when the scenario ends, so step handlers held here never see
//! another scenario's state.

use cucumber::World;

use crate::{custom::CustomSteps, output::CapturedOutput};

/// Per-scenario world holding the component's step handlers.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ComponentWorld {
    /// Handler for the component's custom step.
    pub custom: CustomSteps<CapturedOutput>,
}

impl Default for ComponentWorld {
    fn default() -> Self { Self::new() }
}

impl ComponentWorld {
    /// Create a world whose handlers print to stdout and record what they
    /// print.
    #[must_use]
    pub fn new() -> Self {
        Self {
            custom: CustomSteps::new(CapturedOutput::echo()),
        }
    }

    /// Create a world whose handlers only record their output.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            custom: CustomSteps::new(CapturedOutput::new()),
        }
    }

    /// Lines emitted by this scenario's handlers so far.
    #[must_use]
    pub fn output(&self) -> Vec<String> { self.custom.output().lines() }

    /// Number of successful custom step invocations in this scenario.
    #[must_use]
    pub fn invocations(&self) -> usize { self.custom.invocations() }
}
