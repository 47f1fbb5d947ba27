//! Capturing panics raised by step handlers.
//!
//! Handlers signal failure either by returning a [`StepError`] or by
//! panicking, typically through `assert!`. Direct dispatch converts the panic
//! into a value so callers can report it like any other failure.

use std::{
    any::Any,
    fmt,
    panic::{self, AssertUnwindSafe},
};

use crate::error::{DispatchError, StepError};

/// Panic payload that displays as its message.
///
/// `String` and `&'static str` payloads print verbatim. Anything else falls
/// back to `Debug` formatting of the boxed value.
///
/// ```
/// use std::any::Any;
///
/// use component_steps::panic::PanicMessage;
///
/// let payload: Box<dyn Any + Send> = Box::new("boom");
/// assert_eq!(PanicMessage::from(payload).to_string(), "boom");
/// ```
#[derive(Debug)]
#[must_use]
pub struct PanicMessage(Box<dyn Any + Send>);

impl From<Box<dyn Any + Send>> for PanicMessage {
    fn from(payload: Box<dyn Any + Send>) -> Self { Self(payload) }
}

impl fmt::Display for PanicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.0.downcast_ref::<String>() {
            f.write_str(s)
        } else if let Some(s) = self.0.downcast_ref::<&'static str>() {
            f.write_str(s)
        } else {
            write!(f, "{:?}", self.0)
        }
    }
}

/// Run a step body, turning both returned errors and panics into a
/// [`DispatchError`].
///
/// # Errors
///
/// Returns [`DispatchError::Failed`] when `body` returns an error and
/// [`DispatchError::Panicked`] when it panics.
pub fn catch_step<F>(body: F) -> Result<(), DispatchError>
where
    F: FnOnce() -> Result<(), StepError>,
{
    // The world is discarded with its scenario after any failure, so a
    // partially updated world is never observed.
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(result) => result.map_err(DispatchError::from),
        Err(payload) => Err(DispatchError::Panicked(payload.into())),
    }
}
