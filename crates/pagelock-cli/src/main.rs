//! Pagelock CLI - batch protect/unprotect for a markdown content tree.
//!
//! This is the command-line interface around the core library: it loads
//! the protection configuration, scans the protected folders, acquires
//! a password, and converts documents one at a time, reporting a final
//! tally. Exit code 0 means full success (including "nothing to do");
//! any per-document failure or an invalid password yields exit code 1.

mod cli;
mod commands;
mod prompt;
mod ui;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::ui::UiContext;

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            UiContext::from_env().error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Protect(args) => commands::protect::run(cli, args),
        Commands::Unprotect(args) => commands::unprotect::run(cli, args),
    }
}
