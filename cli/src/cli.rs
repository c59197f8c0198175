//! CLI argument parsing with clap derive

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::application::collector::Collector;
use crate::domain::inventory::InventoryDocument;
use crate::infra::config::YamlConfigStore;
use crate::infra::inventory::{self, WriteOutcome};
use crate::infra::probe::PingProbe;
use crate::infra::prompt::StdioPrompt;
use crate::output::{OutputContext, TerminalReporter};

/// Group name used when no `--role` is given.
pub const DEFAULT_ROLE: &str = "openfire_server";

/// Generate an Ansible inventory from interactively collected host details
#[derive(Parser)]
#[command(name = "invgen", version)]
pub struct Cli {
    /// Directory containing the inventory/ output directory
    #[arg(short, long, default_value = ".")]
    pub destination: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: Format,

    /// Inventory group the host is filed under (only one role supported)
    #[arg(short, long = "role")]
    pub role: Vec<String>,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Supported inventory output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// JSON document, 2-space indent
    Json,
}

impl Cli {
    /// Execute the interactive flow: collect one host record and write the
    /// inventory document.
    ///
    /// # Errors
    ///
    /// Returns an error when the operator aborts against an unreachable
    /// host, when input is exhausted, or when the configuration or the
    /// write fails. A missing `inventory/` directory is NOT an error: it
    /// prints remediation guidance and exits 0.
    pub fn run(self) -> Result<()> {
        let ctx = OutputContext::new(self.no_color, self.quiet);
        let role = resolve_role(&self.role)?;

        let config = YamlConfigStore.load()?;
        config.validate().context("invalid configured defaults")?;

        ctx.header("Inventory generator");
        ctx.info("You will need to provide host information.");

        let mut collector = Collector::new(
            StdioPrompt,
            PingProbe,
            TerminalReporter::new(&ctx),
            config.defaults,
        );
        let record = collector.collect()?;

        let doc = InventoryDocument::single(&role, &record);
        match self.format {
            Format::Json => match inventory::write_json(&self.destination, &doc)? {
                WriteOutcome::Written(path) => {
                    ctx.success(&format!("inventory written to {}", path.display()));
                }
                WriteOutcome::MissingDestination(dir) => print_remediation(&dir),
            },
        }
        Ok(())
    }
}

/// Resolve the group name from the parsed `--role` flags.
///
/// Whether multi-role grouping should file the host under every group is
/// ambiguous; more than one role is rejected rather than guessed at.
fn resolve_role(roles: &[String]) -> Result<String> {
    match roles {
        [] => Ok(DEFAULT_ROLE.to_string()),
        [role] => Ok(role.clone()),
        _ => anyhow::bail!(
            "multi-role grouping is not supported; pass a single --role"
        ),
    }
}

/// Operator guidance for a missing `inventory/` directory. Printed to
/// stderr; the run still exits 0 — this is an environment problem, not a
/// program defect.
fn print_remediation(dir: &Path) {
    eprintln!();
    eprintln!("ERROR: no such directory: {}", dir.display());
    eprintln!("Probably invgen was not run from the project's root directory.");
    eprintln!("Try one of:");
    eprintln!();
    eprintln!("  $ cd <project-root>");
    eprintln!("  $ task generate-inventory   # requires `task` to be installed");
    eprintln!();
    eprintln!("  $ cd <project-root>");
    eprintln!("  $ invgen");
    eprintln!();
}

// ── Unit tests ───────────────────────────────────────────────────────────────
