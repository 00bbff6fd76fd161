use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "a0")]
#[command(about = "Manage Auth0 users declared in state files")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
