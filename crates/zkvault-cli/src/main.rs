//! zkvault CLI - Encrypt and decrypt vault envelopes locally
//!
//! A thin collaborator around `zkvault-core`: it supplies the password and
//! salt, holds the derived key for the lifetime of one command, and prints or
//! reads envelope strings. Nothing but its own config file touches disk.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{misc, vault};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        tracing::debug!(exit_code = exit_code_for(&e), "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Encrypt(args) => vault::handle_encrypt(ctx, args),
        Commands::Decrypt(args) => vault::handle_decrypt(ctx, args),
        Commands::Inspect(args) => vault::handle_inspect(ctx, args),
        Commands::Config => misc::handle_config(ctx),
        Commands::Completions(args) => misc::handle_completions(args.shell),
    }
}

/// Log to stderr. RUST_LOG takes precedence over -v/-q.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
