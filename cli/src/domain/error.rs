//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Validation errors ─────────────────────────────────────────────────────────

/// Errors produced by the field validators. Each message names the failing
/// field so the re-prompt diagnostic is self-contained.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("provided hostname \"{0}\" is NOT valid - too long (max 253 characters)")]
    HostnameTooLong(String),

    #[error("provided hostname \"{0}\" is NOT valid - invalid format or prohibited characters")]
    InvalidHostname(String),

    #[error("provided username \"{0}\" is NOT valid - it does not match ^[a-z][-a-z0-9_]*$")]
    InvalidUsername(String),

    #[error("provided port \"{0}\" is out of bounds; allowed ports are 1 to 65535")]
    PortOutOfRange(i64),
}

// ── Collection errors ─────────────────────────────────────────────────────────

/// Errors that terminate the interactive collection flow.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("aborted: host unreachable and operator declined to continue")]
    Aborted,
}
