//! charpipe binary entry point

use charpipe_cli::commands::Commands;
use charpipe_cli::exit_code;
use clap::Parser;

/// Byte stream transduction toolkit
#[derive(Debug, Parser)]
#[command(name = "charpipe", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}
