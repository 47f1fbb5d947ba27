//! Metric helpers for step execution.
//!
//! This module defines metric names and thin wrappers around the
//! [`metrics`](https://docs.rs/metrics) crate. With the `metrics` feature
//! disabled the helpers compile to nothing.

/// Name of the counter tracking step invocations, labelled by step text.
pub const STEP_INVOCATIONS: &str = "component_steps_invocations_total";
/// Name of the counter tracking failed step invocations.
pub const STEP_FAILURES: &str = "component_steps_failures_total";

/// Record one invocation of the step registered as `pattern`.
#[cfg(feature = "metrics")]
pub fn inc_invocations(pattern: &'static str) {
    metrics::counter!(STEP_INVOCATIONS, "step" => pattern).increment(1);
}

/// Record one invocation of the step registered as `pattern`.
#[cfg(not(feature = "metrics"))]
pub fn inc_invocations(_pattern: &'static str) {}

/// Record a failed step invocation.
#[cfg(feature = "metrics")]
pub fn inc_failures() { metrics::counter!(STEP_FAILURES).increment(1); }

/// Record a failed step invocation.
#[cfg(not(feature = "metrics"))]
pub fn inc_failures() {}
