//! Verification steps used by the behavioural tests.
//!
//! These observe the scenario's [`ComponentWorld`] after the component's own
//! steps have run.

use component_steps::{
    CUSTOM_STEP_MESSAGE,
    ComponentWorld,
    RegistryError,
    StepDefinition,
    StepError,
    StepKeyword,
    StepRegistry,
};

fn expect_emitted(world: &ComponentWorld, expected: usize) -> Result<(), StepError> {
    let lines = world.output();
    if lines.len() != expected || world.invocations() != expected {
        return Err(StepError::assertion(format!(
            "expected {expected} custom step calls, saw {} lines from {} calls",
            lines.len(),
            world.invocations()
        )));
    }
    Ok(())
}

pub struct FreshScenario;

impl StepDefinition<ComponentWorld> for FreshScenario {
    const KEYWORD: StepKeyword = StepKeyword::Given;
    const PATTERN: &'static str = "a fresh component scenario";

    fn run(world: &mut ComponentWorld) -> Result<(), StepError> { expect_emitted(world, 0) }
}

pub struct EmittedOnce;

impl StepDefinition<ComponentWorld> for EmittedOnce {
    const KEYWORD: StepKeyword = StepKeyword::Then;
    const PATTERN: &'static str = "the custom step output was emitted once";

    fn run(world: &mut ComponentWorld) -> Result<(), StepError> { expect_emitted(world, 1) }
}

pub struct EmittedTwice;

impl StepDefinition<ComponentWorld> for EmittedTwice {
    const KEYWORD: StepKeyword = StepKeyword::Then;
    const PATTERN: &'static str = "the custom step output was emitted twice";

    fn run(world: &mut ComponentWorld) -> Result<(), StepError> { expect_emitted(world, 2) }
}

pub struct LinesIdentical;

impl StepDefinition<ComponentWorld> for LinesIdentical {
    const KEYWORD: StepKeyword = StepKeyword::Then;
    const PATTERN: &'static str = "every custom step output line is identical";

    fn run(world: &mut ComponentWorld) -> Result<(), StepError> {
        match world.output().iter().find(|line| *line != CUSTOM_STEP_MESSAGE) {
            Some(line) => Err(StepError::assertion(format!("unexpected output line {line:?}"))),
            None => Ok(()),
        }
    }
}

/// Add the verification steps to `registry`.
pub fn register(registry: &mut StepRegistry<ComponentWorld>) -> Result<(), RegistryError> {
    registry
        .register::<FreshScenario>()?
        .register::<EmittedOnce>()?
        .register::<EmittedTwice>()?
        .register::<LinesIdentical>()?;
    Ok(())
}
