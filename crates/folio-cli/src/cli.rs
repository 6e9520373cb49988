//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{repos::ReposArgs, stats::StatsArgs};

/// Showcase a GitHub organization's open source repositories.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version = env!("FOLIO_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List an organization's repositories, ranked
    Repos(ReposArgs),

    /// Show organization summary counts
    Stats(StatsArgs),
}
