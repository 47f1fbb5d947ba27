//! Error types raised by step handlers and the step registry.

use std::io;

use thiserror::Error;

use crate::{panic::PanicMessage, registry::StepKeyword};

/// Failure reported by a step handler.
///
/// A step that returns an error fails its scenario. Nothing is retried.
#[derive(Debug, Error)]
pub enum StepError {
    /// Writing the step's diagnostic output failed.
    #[error("failed to write step output: {0}")]
    Output(#[from] io::Error),
    /// A verification performed by the step did not hold.
    #[error("assertion failed: {0}")]
    Assertion(String),
}

impl StepError {
    /// Build an [`StepError::Assertion`] from any displayable message.
    pub fn assertion(message: impl Into<String>) -> Self { Self::Assertion(message.into()) }
}

/// Errors raised while building a [`StepRegistry`](crate::StepRegistry).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A step with an overlapping keyword and the same text already exists.
    #[error("step `{keyword} {pattern}` is already registered")]
    DuplicateStep {
        /// Keyword of the rejected registration.
        keyword: StepKeyword,
        /// Literal step text of the rejected registration.
        pattern: &'static str,
    },
    /// The step text was empty or whitespace.
    #[error("step pattern must not be empty")]
    EmptyPattern,
    /// The literal pattern could not be compiled for the cucumber runner.
    #[error("invalid step pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors raised when dispatching a step line directly through the registry.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered step matches the line.
    #[error("no step matches `{keyword} {text}`")]
    Undefined {
        /// Keyword the line was dispatched with.
        keyword: StepKeyword,
        /// Step text that failed to match.
        text: String,
    },
    /// The matched handler returned an error.
    #[error("step failed: {0}")]
    Failed(#[from] StepError),
    /// The matched handler panicked.
    #[error("step panicked: {0}")]
    Panicked(PanicMessage),
}
