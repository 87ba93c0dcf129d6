//! Quill — markdown-to-HTML page builder CLI.
//!
//! # Usage
//!
//! ```text
//! quill build <input>... [--out <dir>] [--templates <dir>] [--dry-run]
//! quill check <input>...
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{build::BuildArgs, check::CheckArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "Render markdown documents into templated HTML pages",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render markdown files or directories into the build output.
    Build(BuildArgs),

    /// Parse and validate pages without rendering any output.
    Check(CheckArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build(args) => args.run(),
        Commands::Check(args) => args.run(),
    }
}
