//! Port trait definitions for the application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::output`.

use anyhow::Result;

// ── Console Port ──────────────────────────────────────────────────────────────

/// Abstracts console line input so the collector can be tested with
/// scripted input instead of a real terminal.
pub trait Prompt {
    /// Display `prompt` on stdout and read one line of input, without the
    /// trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error when input is exhausted (EOF) or the terminal
    /// fails — an error here must terminate the run, never loop.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

// ── Network Probe Port ────────────────────────────────────────────────────────

/// Abstracts the network liveness check so the collector can be tested
/// without real network access.
pub trait ReachabilityProbe {
    /// Send one best-effort liveness probe to `address`.
    ///
    /// # Errors
    ///
    /// Returns an error only on internal failure; an address that does not
    /// answer is `Ok(false)`, not an error.
    fn reachable(&self, address: &str) -> Result<bool>;
}

// ── Reporting Port ────────────────────────────────────────────────────────────

/// Abstracts diagnostic reporting so the collector can emit messages
/// without depending on the presentation layer.
pub trait Reporter {
    /// Informational message (stdout, suppressible).
    fn info(&self, message: &str);
    /// Warning message (stderr).
    fn warn(&self, message: &str);
    /// Validation diagnostic (stderr).
    fn error(&self, message: &str);
}
