//! The component's custom step.
//!
//! Change [`CustomSteps::custom_step`], or add handlers alongside it, to
//! verify behaviour specific to your component. Each scenario gets its own
//! [`CustomSteps`] through [`ComponentWorld`](crate::world::ComponentWorld).

use log::debug;

use crate::{
    error::StepError,
    output::{StepOutput, Stdout},
    registry::{StepDefinition, StepKeyword},
    world::ComponentWorld,
};

/// Step text matched by [`CallCustomStep`].
pub const CUSTOM_STEP_PATTERN: &str = "I call my custom step";

/// Line written each time the custom step runs.
pub const CUSTOM_STEP_MESSAGE: &str = "My custom step was called ";

/// Scenario-scoped handler for the component's custom steps.
#[derive(Debug, Default)]
pub struct CustomSteps<O = Stdout> {
    out: O,
    invocations: usize,
}

impl<O: StepOutput> CustomSteps<O> {
    /// Create a handler writing to `out`.
    pub fn new(out: O) -> Self { Self { out, invocations: 0 } }

    /// Run the custom step.
    ///
    /// Writes [`CUSTOM_STEP_MESSAGE`] to the handler's output. Every call
    /// writes the same line regardless of earlier calls.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Output`] if the line cannot be written.
    pub fn custom_step(&mut self) -> Result<(), StepError> {
        self.out.write_line(CUSTOM_STEP_MESSAGE)?;
        self.invocations += 1;
        debug!("custom step called: invocations={}", self.invocations);
        Ok(())
    }

    /// Number of times [`custom_step`](Self::custom_step) has succeeded on
    /// this handler.
    #[must_use]
    pub fn invocations(&self) -> usize { self.invocations }

    /// Borrow the handler's output sink.
    pub fn output(&self) -> &O { &self.out }
}

/// Binds [`CUSTOM_STEP_PATTERN`] to [`CustomSteps::custom_step`].
///
/// Registered under [`StepKeyword::Any`] so the line matches after `Given`,
/// `When`, `Then`, or a continuing `And`.
#[derive(Debug)]
pub struct CallCustomStep;

impl StepDefinition<ComponentWorld> for CallCustomStep {
    const KEYWORD: StepKeyword = StepKeyword::Any;
    const PATTERN: &'static str = CUSTOM_STEP_PATTERN;

    fn run(world: &mut ComponentWorld) -> Result<(), StepError> { world.custom.custom_step() }
}

#[cfg(test)]
mod tests {
    use std::io;

    use rstest::{fixture, rstest};

    use super::{CUSTOM_STEP_MESSAGE, CustomSteps};
    use crate::{
        error::StepError,
        output::{CapturedOutput, StepOutput},
    };

    #[fixture]
    fn steps() -> CustomSteps<CapturedOutput> { CustomSteps::new(CapturedOutput::new()) }

    #[rstest]
    fn writes_one_line_per_call(mut steps: CustomSteps<CapturedOutput>) {
        steps.custom_step().expect("custom step");
        assert_eq!(steps.output().lines(), [CUSTOM_STEP_MESSAGE]);
        assert_eq!(steps.invocations(), 1);
    }

    #[rstest]
    #[case(2)]
    #[case(5)]
    fn repeated_calls_are_identical(mut steps: CustomSteps<CapturedOutput>, #[case] calls: usize) {
        for _ in 0..calls {
            steps.custom_step().expect("custom step");
        }
        let lines = steps.output().lines();
        assert_eq!(lines.len(), calls);
        assert!(lines.iter().all(|line| line == CUSTOM_STEP_MESSAGE));
        assert_eq!(steps.invocations(), calls);
    }

    struct BrokenPipe;

    impl StepOutput for BrokenPipe {
        fn write_line(&mut self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn output_failure_propagates() {
        let mut steps = CustomSteps::new(BrokenPipe);
        let err = steps.custom_step().expect_err("write must fail");
        assert!(matches!(err, StepError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(steps.invocations(), 0);
    }
}
