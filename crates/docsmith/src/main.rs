//! docsmith CLI - documentation build tooling.
//!
//! Provides commands for:
//! - `check-links`: Verify relative links across the docs tree
//! - `expand`: Expand snippet references in markdown files

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckLinksArgs, ExpandArgs};
use output::Output;

/// docsmith - documentation build tooling.
#[derive(Parser)]
#[command(name = "docsmith", version, about)]
struct Cli {
    /// Enable verbose logging.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relative documentation links against the docs tree.
    CheckLinks(CheckLinksArgs),
    /// Expand snippet references in markdown files.
    Expand(ExpandArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::CheckLinks(args) => args.execute(),
        Commands::Expand(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
