//! Explicit registration of step definitions.
//!
//! Each step is a type implementing [`StepDefinition`] that names its keyword
//! and literal step text. [`StepRegistry`] collects them, rejects duplicates,
//! and either dispatches step lines directly or hands the table to the
//! cucumber runner as a [`step::Collection`].

use std::fmt;

use cucumber::{Step, step};
use futures::future::LocalBoxFuture;
use log::warn;
use regex::Regex;

use crate::{
    error::{DispatchError, RegistryError, StepError},
    metrics,
    panic::catch_step,
};

/// Gherkin keyword a step is registered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Matches `Given` lines and the `And`/`But` lines continuing them.
    Given,
    /// Matches `When` lines and the `And`/`But` lines continuing them.
    When,
    /// Matches `Then` lines and the `And`/`But` lines continuing them.
    Then,
    /// Matches under every keyword.
    Any,
}

impl StepKeyword {
    /// Returns `true` if a step registered under `self` answers to a line
    /// with keyword `other`, or vice versa.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self == other || self == Self::Any || other == Self::Any
    }

    /// Split a step line into its keyword and text.
    ///
    /// `And`, `But`, and `*` continue an earlier keyword that a single line
    /// cannot know, so they map to [`StepKeyword::Any`].
    #[must_use]
    pub fn split_line(line: &str) -> Option<(Self, &str)> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace)?;
        let keyword = match word {
            "Given" => Self::Given,
            "When" => Self::When,
            "Then" => Self::Then,
            "And" | "But" | "*" => Self::Any,
            _ => return None,
        };
        Some((keyword, rest.trim()))
    }

    fn expand(self) -> &'static [Slot] {
        match self {
            Self::Given => &[Slot::Given],
            Self::When => &[Slot::When],
            Self::Then => &[Slot::Then],
            Self::Any => &[Slot::Given, Slot::When, Slot::Then],
        }
    }
}

/// Keyword slots of a cucumber step collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Given,
    When,
    Then,
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::Any => "*",
        })
    }
}

/// A step that can be registered with a [`StepRegistry`].
///
/// ```
/// use component_steps::{StepDefinition, StepError, StepKeyword, StepRegistry};
///
/// #[derive(Default)]
/// struct Counter(u32);
///
/// struct Bump;
///
/// impl StepDefinition<Counter> for Bump {
///     const KEYWORD: StepKeyword = StepKeyword::When;
///     const PATTERN: &'static str = "the counter is bumped";
///
///     fn run(world: &mut Counter) -> Result<(), StepError> {
///         world.0 += 1;
///         Ok(())
///     }
/// }
///
/// let mut registry = StepRegistry::new();
/// registry.register::<Bump>().unwrap();
///
/// let mut counter = Counter::default();
/// registry
///     .dispatch_line(&mut counter, "When the counter is bumped")
///     .unwrap();
/// assert_eq!(counter.0, 1);
/// ```
pub trait StepDefinition<W> {
    /// Keyword the step answers to.
    const KEYWORD: StepKeyword;
    /// Literal step text, matched against the whole line.
    const PATTERN: &'static str;

    /// Execute the step against the scenario's world.
    ///
    /// # Errors
    ///
    /// Returns a [`StepError`] to fail the scenario.
    fn run(world: &mut W) -> Result<(), StepError>;
}

/// A registered step.
pub struct Registration<W> {
    keyword: StepKeyword,
    pattern: &'static str,
    run: fn(&mut W) -> Result<(), DispatchError>,
    step: Step<W>,
}

impl<W> Registration<W> {
    /// Keyword the step was registered under.
    #[must_use]
    pub fn keyword(&self) -> StepKeyword { self.keyword }

    /// Literal step text.
    #[must_use]
    pub fn pattern(&self) -> &'static str { self.pattern }

    fn regex(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!("^{}$", regex::escape(self.pattern)))
    }
}

impl<W> fmt::Debug for Registration<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("keyword", &self.keyword)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// Table of step definitions for worlds of type `W`.
pub struct StepRegistry<W> {
    steps: Vec<Registration<W>>,
}

impl<W> Default for StepRegistry<W> {
    fn default() -> Self { Self { steps: Vec::new() } }
}

impl<W> fmt::Debug for StepRegistry<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.steps).finish()
    }
}

impl<W> StepRegistry<W> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Register the step `S`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyPattern`] if `S::PATTERN` is blank and
    /// [`RegistryError::DuplicateStep`] if a step with an overlapping keyword
    /// and the same text is already registered.
    pub fn register<S>(&mut self) -> Result<&mut Self, RegistryError>
    where
        S: StepDefinition<W> + 'static,
    {
        let pattern = S::PATTERN.trim();
        if pattern.is_empty() {
            return Err(RegistryError::EmptyPattern);
        }
        if self
            .steps
            .iter()
            .any(|reg| reg.keyword.overlaps(S::KEYWORD) && reg.pattern == pattern)
        {
            return Err(RegistryError::DuplicateStep {
                keyword: S::KEYWORD,
                pattern,
            });
        }
        let registration = Registration {
            keyword: S::KEYWORD,
            pattern,
            run: execute::<W, S>,
            step: adapt::<W, S>,
        };
        // Fail at registration rather than when the runner is built.
        registration.regex()?;
        self.steps.push(registration);
        Ok(self)
    }

    /// Find the step answering to `keyword` and `text`.
    ///
    /// Matching is exact on the trimmed text; no parameters are extracted.
    #[must_use]
    pub fn find(&self, keyword: StepKeyword, text: &str) -> Option<&Registration<W>> {
        let text = text.trim();
        self.steps
            .iter()
            .find(|reg| reg.keyword.overlaps(keyword) && reg.pattern == text)
    }

    /// Run the step answering to `keyword` and `text` against `world`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Undefined`] if no step matches, and
    /// [`DispatchError::Failed`] or [`DispatchError::Panicked`] if the step
    /// fails.
    pub fn dispatch(
        &self,
        world: &mut W,
        keyword: StepKeyword,
        text: &str,
    ) -> Result<(), DispatchError> {
        let Some(reg) = self.find(keyword, text) else {
            return Err(DispatchError::Undefined {
                keyword,
                text: text.trim().to_owned(),
            });
        };
        (reg.run)(world)
    }

    /// Run a full step line such as `"And I call my custom step"`.
    ///
    /// # Errors
    ///
    /// As for [`dispatch`](Self::dispatch). A line without a recognised
    /// keyword is undefined.
    pub fn dispatch_line(&self, world: &mut W, line: &str) -> Result<(), DispatchError> {
        match StepKeyword::split_line(line) {
            Some((keyword, text)) => self.dispatch(world, keyword, text),
            None => Err(DispatchError::Undefined {
                keyword: StepKeyword::Any,
                text: line.trim().to_owned(),
            }),
        }
    }

    /// Build the cucumber step collection for this registry.
    ///
    /// Each pattern becomes an anchored regex over its escaped text,
    /// registered once per keyword it answers to.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Pattern`] if a pattern fails to compile.
    pub fn collection(&self) -> Result<step::Collection<W>, RegistryError> {
        let mut collection = step::Collection::new();
        for reg in &self.steps {
            let regex = reg.regex()?;
            for keyword in reg.keyword.expand() {
                collection = match keyword {
                    Slot::Given => collection.given(None, regex.clone(), reg.step),
                    Slot::When => collection.when(None, regex.clone(), reg.step),
                    Slot::Then => collection.then(None, regex.clone(), reg.step),
                };
            }
        }
        Ok(collection)
    }

    /// Registered `(keyword, pattern)` pairs in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = (StepKeyword, &'static str)> + '_ {
        self.steps.iter().map(|reg| (reg.keyword, reg.pattern))
    }

    /// Number of registered steps.
    #[must_use]
    pub fn len(&self) -> usize { self.steps.len() }

    /// Returns `true` if no steps are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }
}

// Shared by direct dispatch and the cucumber adapter so both count and log
// returned errors and panics alike.
fn execute<W, S: StepDefinition<W>>(world: &mut W) -> Result<(), DispatchError> {
    let pattern = S::PATTERN.trim();
    metrics::inc_invocations(pattern);
    catch_step(|| S::run(world)).inspect_err(|err| {
        metrics::inc_failures();
        warn!("step `{} {pattern}` failed: {err}", S::KEYWORD);
    })
}

// Cucumber reports a panicking step as failed, so failures panic again here
// with their message.
fn adapt<W, S>(world: &mut W, _ctx: step::Context) -> LocalBoxFuture<'_, ()>
where
    S: StepDefinition<W> + 'static,
{
    Box::pin(async move {
        if let Err(err) = execute::<W, S>(world) {
            panic!("{err}");
        }
    })
}
