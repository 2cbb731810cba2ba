use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tk")]
#[command(about = "Support ticket desk: accounts, tickets and guarded views")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage file (defaults to storage.path under the config directory)
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
