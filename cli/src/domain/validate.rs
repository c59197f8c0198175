//! Pure field validators — no I/O, no async.
//!
//! All functions take data in and return data out. Zero imports from
//! `crate::infra`, `crate::application`, or `crate::output`.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::error::ValidationError;

/// Single DNS label: 1–63 chars, lowercase alphanumerics and hyphens,
/// no leading or trailing hyphen.
pub static HOSTNAME_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern — cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").expect("valid regex")
});

/// POSIX-style username, same rule as Debian's NAME_REGEX.
pub static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z][-a-z0-9_]*$").expect("valid regex")
});

/// Maximum overall hostname length, per RFC 1035.
pub const HOSTNAME_MAX_LEN: usize = 253;

/// Validate a hostname: one or more dot-separated DNS labels, overall
/// length ≤ 253 characters.
///
/// # Errors
///
/// Returns `HostnameTooLong` when the name exceeds 253 characters, or
/// `InvalidHostname` when any label violates the label pattern.
pub fn validate_hostname(value: &str) -> Result<(), ValidationError> {
    if value.len() > HOSTNAME_MAX_LEN {
        return Err(ValidationError::HostnameTooLong(value.to_string()));
    }
    let valid = !value.is_empty() && value.split('.').all(|label| HOSTNAME_LABEL_RE.is_match(label));
    if !valid {
        return Err(ValidationError::InvalidHostname(value.to_string()));
    }
    Ok(())
}

/// Validate a username against `^[a-z][-a-z0-9_]*$`.
///
/// # Errors
///
/// Returns `InvalidUsername` when the value does not match the pattern.
pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    if !USERNAME_RE.is_match(value) {
        return Err(ValidationError::InvalidUsername(value.to_string()));
    }
    Ok(())
}

/// Validate a port number against the 1–65535 range.
///
/// Takes an `i64` so the caller can hand over whatever integer the operator
/// typed; the narrowing to `u16` happens here, after the range check.
///
/// # Errors
///
/// Returns `PortOutOfRange` when the value is outside 1–65535.
pub fn validate_port(value: i64) -> Result<u16, ValidationError> {
    u16::try_from(value)
        .ok()
        .filter(|port| *port >= 1)
        .ok_or(ValidationError::PortOutOfRange(value))
}

// ── Unit tests ───────────────────────────────────────────────────────────────
