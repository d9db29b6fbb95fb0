mod commands;
mod labels;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{EncodeCommand, InspectCommand, StatusCommand};

/// Opening-hours toolbox for the dish menu platform
#[derive(Debug, Parser)]
#[command(
    name = "dish-hours",
    version,
    about = "Inspect, evaluate and encode venue opening hours"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode a stored schedule string and print the weekly table
    Inspect(InspectCommand),
    /// Report open/closed state and the next transition
    Status(StatusCommand),
    /// Encode a schedule document into the storage string
    Encode(EncodeCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Inspect(cmd) => cmd.execute()?,
        Commands::Status(cmd) => cmd.execute()?,
        Commands::Encode(cmd) => cmd.execute()?,
    };

    std::process::exit(exit_code);
}
