//! Configuration for running feature files.
//!
//! [`RunnerConfig`] is built with chained setters, starting from the path of
//! a feature file or a directory of them.

use std::path::{Path, PathBuf};

use cucumber::gherkin;

/// Settings for a single run of the feature files.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    features: PathBuf,
    tags: TagFilter,
    max_concurrent_scenarios: Option<usize>,
    fail_fast: bool,
    fail_on_skipped: bool,
}

impl RunnerConfig {
    /// Run the feature file or directory at `features`.
    #[must_use]
    pub fn new(features: impl Into<PathBuf>) -> Self {
        Self {
            features: features.into(),
            tags: TagFilter::default(),
            max_concurrent_scenarios: None,
            fail_fast: false,
            fail_on_skipped: false,
        }
    }

    /// Only run scenarios carrying one of `tags`.
    #[must_use]
    pub fn tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.tags = TagFilter::new(tags);
        self
    }

    /// Limit how many scenarios run at once. `None` keeps the runner's
    /// default.
    #[must_use]
    pub fn max_concurrent_scenarios(mut self, limit: impl Into<Option<usize>>) -> Self {
        self.max_concurrent_scenarios = limit.into();
        self
    }

    /// Stop after the first failed scenario.
    #[must_use]
    pub fn fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    /// Treat skipped steps, usually undefined ones, as a failed run.
    #[must_use]
    pub fn fail_on_skipped(mut self, enabled: bool) -> Self {
        self.fail_on_skipped = enabled;
        self
    }

    /// Path of the feature file or directory.
    #[must_use]
    pub fn features(&self) -> &Path { &self.features }

    /// Scenario tag filter.
    #[must_use]
    pub fn tag_filter(&self) -> &TagFilter { &self.tags }

    /// Configured concurrency limit.
    #[must_use]
    pub fn concurrency(&self) -> Option<usize> { self.max_concurrent_scenarios }

    /// Whether the run stops at the first failure.
    #[must_use]
    pub fn is_fail_fast(&self) -> bool { self.fail_fast }

    /// Whether skipped steps fail the run.
    #[must_use]
    pub fn is_fail_on_skipped(&self) -> bool { self.fail_on_skipped }
}

/// Selects scenarios by tag.
///
/// An empty filter selects everything. Otherwise a scenario is selected when
/// it, its rule, or its feature carries any of the filter's tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    /// Build a filter from tags, with or without their leading `@`.
    pub fn new<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|tag| normalise(tag.as_ref()).to_owned())
            .filter(|tag| !tag.is_empty())
            .collect();
        Self { tags }
    }

    /// Returns `true` if the filter selects everything.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.tags.is_empty() }

    /// Returns `true` if any of `tags` is in the filter.
    #[must_use]
    pub fn matches<T: AsRef<str>>(&self, tags: &[T]) -> bool {
        self.is_empty()
            || tags
                .iter()
                .any(|tag| self.tags.iter().any(|wanted| wanted == normalise(tag.as_ref())))
    }

    /// Returns `true` if the scenario should run.
    #[must_use]
    pub fn selects(
        &self,
        feature: &gherkin::Feature,
        rule: Option<&gherkin::Rule>,
        scenario: &gherkin::Scenario,
    ) -> bool {
        self.is_empty()
            || self.matches(&scenario.tags)
            || rule.is_some_and(|r| self.matches(&r.tags))
            || self.matches(&feature.tags)
    }
}

fn normalise(tag: &str) -> &str { tag.trim().trim_start_matches('@') }
