//! Interactive collector — solicits host fields with validation loops.
//!
//! Talks to the terminal and the network exclusively through the `Prompt`,
//! `ReachabilityProbe`, and `Reporter` ports, so every loop is testable
//! with scripted doubles. Invalid input re-prompts indefinitely; only an
//! exhausted input stream or an operator abort terminates the flow.

use anyhow::Result;

use crate::application::ports::{Prompt, ReachabilityProbe, Reporter};
use crate::domain::config::PromptDefaults;
use crate::domain::error::CollectError;
use crate::domain::host::HostRecord;
use crate::domain::validate::{validate_hostname, validate_port, validate_username};

/// Collects one [`HostRecord`] from the operator, field by field.
pub struct Collector<P, N, R> {
    prompt: P,
    probe: N,
    reporter: R,
    defaults: PromptDefaults,
}

impl<P: Prompt, N: ReachabilityProbe, R: Reporter> Collector<P, N, R> {
    pub fn new(prompt: P, probe: N, reporter: R, defaults: PromptDefaults) -> Self {
        Self {
            prompt,
            probe,
            reporter,
            defaults,
        }
    }

    /// Run the full interactive flow: address, hostname, port, user.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Aborted`] when the host is unreachable and
    /// the operator declines to continue, or an error when input is
    /// exhausted.
    pub fn collect(&mut self) -> Result<HostRecord> {
        let address = self.input_address()?;
        let hostname = self.input_hostname()?;
        let port = self.input_port()?;
        let user = self.input_user()?;
        Ok(HostRecord {
            address,
            hostname,
            port,
            user,
        })
    }

    /// Free-form address, gated by one reachability probe. An unreachable
    /// host needs an explicit confirmation (default "no") to proceed.
    fn input_address(&mut self) -> Result<String> {
        let address = self.prompt.read_line("domain name/ip address: ")?;
        if !self.probe.reachable(&address)? {
            self.reporter
                .warn(&format!("provided host \"{address}\" is unreachable"));
            if !self.input_bool("Proceed? [y/N]: ", false)? {
                self.reporter.error("aborting");
                return Err(CollectError::Aborted.into());
            }
        }
        Ok(address)
    }

    fn input_hostname(&mut self) -> Result<String> {
        let prompt = format!("hostname (default: {}): ", self.defaults.hostname);
        loop {
            let value = self.prompt.read_line(&prompt)?;
            if value.is_empty() {
                self.reporter.info(&format!(
                    "hostname: using default \"{}\"",
                    self.defaults.hostname
                ));
                return Ok(self.defaults.hostname.clone());
            }
            match validate_hostname(&value) {
                Ok(()) => return Ok(value),
                Err(e) => self.reporter.error(&e.to_string()),
            }
        }
    }

    /// The range check sits here, not in `input_int`: parsing and range
    /// enforcement are separate concerns with separate re-prompt behavior.
    fn input_port(&mut self) -> Result<u16> {
        let prompt = format!("ssh port (default: {}): ", self.defaults.port);
        loop {
            let value = self.input_int(&prompt, i64::from(self.defaults.port))?;
            match validate_port(value) {
                Ok(port) => return Ok(port),
                Err(e) => self.reporter.error(&e.to_string()),
            }
        }
    }

    fn input_user(&mut self) -> Result<String> {
        let prompt = format!("user (default: {}): ", self.defaults.user);
        loop {
            let value = self.prompt.read_line(&prompt)?;
            if value.is_empty() {
                return Ok(self.defaults.user.clone());
            }
            match validate_username(&value) {
                Ok(()) => return Ok(value),
                Err(e) => self.reporter.error(&e.to_string()),
            }
        }
    }

    /// Integer input: empty returns `default`, non-numeric input
    /// re-prompts silently.
    fn input_int(&mut self, prompt: &str, default: i64) -> Result<i64> {
        loop {
            let value = self.prompt.read_line(prompt)?;
            if value.is_empty() {
                return Ok(default);
            }
            if let Ok(parsed) = value.parse::<i64>() {
                return Ok(parsed);
            }
        }
    }

    /// Yes/no input: case-insensitive `yes`/`y`/`1` → true,
    /// `no`/`n`/`0` → false, empty → `default`, anything else re-prompts.
    fn input_bool(&mut self, prompt: &str, default: bool) -> Result<bool> {
        loop {
            let value = self.prompt.read_line(prompt)?;
            match value.to_lowercase().as_str() {
                "yes" | "y" | "1" => return Ok(true),
                "no" | "n" | "0" => return Ok(false),
                "" => return Ok(default),
                _ => {}
            }
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
