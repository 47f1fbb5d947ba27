//! Line-oriented output sinks for step handlers.
//!
//! Step handlers report progress as whole human-readable lines. The
//! [`StepOutput`] trait abstracts over where those lines go so the same
//! handler can print to the terminal during a run and be observed in tests.

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Destination for diagnostic lines emitted by a step.
pub trait StepOutput {
    /// Write `line` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying stream.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<O: StepOutput + ?Sized> StepOutput for &mut O {
    fn write_line(&mut self, line: &str) -> io::Result<()> { (**self).write_line(line) }
}

/// Writes lines to the process's standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

impl StepOutput for Stdout {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// In-memory sink recording every line written through any of its clones.
///
/// Clones share the same buffer, so a handle kept by a test observes lines
/// written by a handle moved into a handler.
#[derive(Clone, Debug, Default)]
pub struct CapturedOutput {
    lines: Arc<Mutex<Vec<String>>>,
    echo: bool,
}

impl CapturedOutput {
    /// Create an empty capture that does not print.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create an empty capture that also mirrors each line to stdout.
    #[must_use]
    pub fn echo() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }

    /// Snapshot of the lines captured so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> { self.guard().clone() }

    /// Drain the captured lines, leaving the buffer empty.
    pub fn take(&self) -> Vec<String> { std::mem::take(&mut *self.guard()) }

    /// Number of captured lines.
    #[must_use]
    pub fn len(&self) -> usize { self.guard().len() }

    /// Returns `true` if nothing has been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.guard().is_empty() }

    // A panic while holding the lock cannot leave a `Vec<String>` half
    // written, so a poisoned buffer is still usable.
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StepOutput for CapturedOutput {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.echo {
            Stdout.write_line(line)?;
        }
        self.guard().push(line.to_owned());
        Ok(())
    }
}
