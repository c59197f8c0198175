//! Reachability probe — shells out for a single liveness check.

use std::process::{Command, Stdio};

use anyhow::Result;

use crate::application::ports::ReachabilityProbe;

/// Environment variable overriding the probe program. The override is
/// invoked as `<program> <address>` instead of `ping -c 1 <address>`.
pub const PING_COMMAND_ENV: &str = "INVGEN_PING_COMMAND";

/// Production probe: one ICMP echo request via the system `ping`,
/// best-effort — exit status 0 means reachable, anything else (including
/// a probe that cannot be spawned) means unreachable.
pub struct PingProbe;

impl ReachabilityProbe for PingProbe {
    fn reachable(&self, address: &str) -> Result<bool> {
        let program = std::env::var(PING_COMMAND_ENV).ok();
        Ok(run_probe(program.as_deref(), address))
    }
}

fn run_probe(override_program: Option<&str>, address: &str) -> bool {
    let mut command = match override_program {
        Some(program) => {
            let mut c = Command::new(program);
            c.arg(address);
            c
        }
        None => {
            let mut c = Command::new("ping");
            c.args(["-c", "1", address]);
            c
        }
    };
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
