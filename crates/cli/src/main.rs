mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "vectorguard")]
#[command(about = "Attack-vector brief catalog for LLM-driven Solidity audits")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available detector commands
    List {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Path to config file (default: .vectorguard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Render the analysis brief for a detector command
    Brief {
        /// Detector command name (e.g. "reentrancy")
        command: String,

        /// Path to config file (default: .vectorguard.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the brief's SHA-256 fingerprint instead of the brief itself
        #[arg(long)]
        fingerprint: bool,
    },
    /// List the attack vectors in a detector's catalog
    Vectors {
        /// Detector command name (e.g. "reentrancy")
        command: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Generate a default .vectorguard.toml config file
    Init,
}

#[derive(ValueEnum, Clone)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { format, config } => commands::list::run(format, config),
        Commands::Brief {
            command,
            config,
            fingerprint,
        } => commands::brief::run(&command, config, fingerprint),
        Commands::Vectors {
            command,
            format,
            no_color,
        } => commands::vectors::run(&command, format, no_color),
        Commands::Init => commands::init::run(),
    }
}
