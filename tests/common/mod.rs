//! Shared utilities for integration tests.
//!
//! Provides a serialised handle to the global `logtest` logger so tests that
//! inspect log records do not observe each other's output.

// Items in this shared module may not be used by all test binaries that import it.
#![allow(
    dead_code,
    reason = "shared test utilities are not used by all test binaries"
)]

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::Level;
use logtest::Logger;
use rstest::fixture;

/// Exclusive handle to the process-wide [`Logger`].
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the logger, installing it on first use, and discard any
    /// records left by earlier tests.
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        // A test that panicked while holding the logger leaves nothing behind
        // that `drain` cannot clear.
        let mut handle = Self {
            guard: logger.lock().unwrap_or_else(PoisonError::into_inner),
        };
        handle.drain();
        handle
    }

    /// Remove and return every captured `(level, message)` pair.
    pub fn drain(&mut self) -> Vec<(Level, String)> {
        let mut records = Vec::new();
        while let Some(record) = self.guard.pop() {
            records.push((record.level(), record.args().to_string()));
        }
        records
    }
}

#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }
