//! MDC CLI - Markdown to HTML converter.
//!
//! Provides commands for:
//! - `convert`: Convert a markdown document to HTML
//! - `check`: Validate a document without writing output

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ConvertArgs};
use output::Output;

/// MDC - Markdown to HTML converter.
#[derive(Parser)]
#[command(name = "mdc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a markdown document to HTML.
    Convert(ConvertArgs),
    /// Validate a markdown document without writing output.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = match &cli.command {
        Commands::Convert(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
