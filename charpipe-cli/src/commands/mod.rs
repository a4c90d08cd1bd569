//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod demo;
pub mod run;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one transduction variant over a single input
    Run(run::RunArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Demonstrations of standard stream behavior
    Demo {
        #[command(subcommand)]
        subcommand: DemoCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the transduction variants
    Ops,
}

/// Demo subcommands
#[derive(Debug, Subcommand)]
pub enum DemoCommands {
    /// Show how stdout and stderr behave under redirection
    Streams,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Run(args) => args.execute(),
            Commands::List {
                subcommand: ListCommands::Ops,
            } => {
                run::list_ops();
                Ok(())
            }
            Commands::Demo {
                subcommand: DemoCommands::Streams,
            } => demo::streams(),
        }
    }
}
