//! pkgdocs CLI - Package documentation site renderer.
//!
//! Provides commands for:
//! - `render`: Render a documentation page with the persisted theme
//! - `theme show|set|toggle`: Inspect or change the persisted theme

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ThemeCommand};
use output::Output;

/// pkgdocs - Package documentation site renderer.
#[derive(Parser)]
#[command(name = "pkgdocs", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a documentation page.
    Render(RenderArgs),
    /// Theme preference commands.
    #[command(subcommand)]
    Theme(ThemeCommand),
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
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Theme(cmd) => cmd.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
