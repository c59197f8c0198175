//! invgen — interactive Ansible inventory generator.

use clap::Parser;

use invgen_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
