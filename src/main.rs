mod config;
mod new;
mod prompt;
mod viewer;
mod workspace;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tc-doc", version, about = "Create and open Threat Composer documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty Threat Composer document and open it in the viewer
    #[command(visible_alias = "create")]
    New {
        /// Base name for the document (prompted for when omitted)
        name: Option<String>,
        /// Workspace root directory (auto-detected if omitted)
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load()?;

    match cli.command {
        Commands::New { name, root } => new::run(name.as_deref(), root.as_deref(), &config),
    }
}
