//! Command handling pipeline.
//!
//! A handler chain is assembled per command type: decorators on the
//! outside, the application service at the innermost position. Decorators
//! forward the command value unchanged and reflect the inner result without
//! alteration.

use crate::command::Command;
use crate::error::DomainError;

/// Handler for a single command type.
///
/// `handle` either completes, meaning the command was processed (possibly
/// doing nothing observable), or fails with a domain or validation error.
pub trait Handler<C: Command> {
    /// Processes the command.
    fn handle(&self, command: C) -> Result<(), DomainError>;
}

/// Decorator that logs around the wrapped handler.
///
/// Emits a "command started" record before delegating and a "command
/// finished" record only when delegation succeeds. A failed command is
/// visible as a started marker with no finished marker, plus the error
/// propagated unchanged to the caller.
pub struct LoggingHandler<H> {
    inner: H,
}

impl<H> LoggingHandler<H> {
    /// Wraps a handler.
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    /// Unwraps the decorator, returning the inner handler.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<C: Command, H: Handler<C>> Handler<C> for LoggingHandler<H> {
    fn handle(&self, command: C) -> Result<(), DomainError> {
        let name = command.command_type();
        tracing::info!(command = name, "command started");
        self.inner.handle(command)?;
        tracing::info!(command = name, "command finished");
        Ok(())
    }
}
