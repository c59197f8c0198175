//! `TerminalReporter` — presentation-layer implementation of `Reporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::Reporter`
//! trait so the collector can emit diagnostics without depending on any
//! presentation type directly.

use crate::application::ports::Reporter;
use crate::output::OutputContext;

/// Terminal reporter that wraps an [`OutputContext`].
///
/// - `info()` goes to stdout (suppressed when `ctx.quiet`)
/// - `warn()` and `error()` go to stderr (never suppressed)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl Reporter for TerminalReporter<'_> {
    fn info(&self, message: &str) {
        self.ctx.info(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }

    fn error(&self, message: &str) {
        self.ctx.error(message);
    }
}
