//! Command-line definitions for the `pagelock` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "pagelock",
    version,
    about = "Protect selected markdown documents with password-based encryption",
    long_about = "Encrypts the documents under the configured protected folders so a \
public build can ship while keeping them unreadable, and decrypts them again for \
local editing."
)]
pub struct Cli {
    /// Content tree root the protected folders are resolved against
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Site configuration file, relative to the root
    #[arg(long, global = true, default_value = "public/config.yml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Encrypt every unprotected document under the protected folders
    Protect(PasswordArgs),
    /// Decrypt every protected document under the protected folders
    Unprotect(PasswordArgs),
}

#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Password for unattended runs; prompts interactively when absent
    #[arg(long, env = "PAGELOCK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}
