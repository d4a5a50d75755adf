//! Pluck CLI - project JSON documents through shape templates

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "pluck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging, down to per-node projection traces
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project a JSON document through a JSON template
    Project {
        /// Document file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        document: PathBuf,

        /// Template file
        #[arg(short, long)]
        template: PathBuf,

        /// Print compact JSON instead of indented
        #[arg(long)]
        compact: bool,
    },

    /// Project the built-in DaemonSet sample
    Demo {
        /// Print compact JSON instead of indented
        #[arg(long)]
        compact: bool,
    },
}

/// Fallback filter when `RUST_LOG` is unset
fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "trace"
    } else {
        "info"
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(cli.verbose))),
        )
        .init();

    // Execute command
    let output = match cli.command {
        Commands::Project {
            document,
            template,
            compact,
        } => commands::project::execute(&document, &template, compact)?,
        Commands::Demo { compact } => commands::demo::execute(compact)?,
    };
    println!("{}", output);

    Ok(())
}
