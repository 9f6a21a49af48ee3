use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "AoE4World now-playing overlay")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Poll AoE4World and print the overlay state as it changes
    Watch {
        /// AoE4World profile id to track
        #[arg(short, long)]
        profile_id: Option<u64>,
        /// Seconds between refreshes (optional, defaults to 30)
        #[arg(short, long)]
        interval: Option<u64>,
        /// Cosmetic theme name handed to the presentation layer
        #[arg(short, long)]
        theme: Option<String>,
    },
    /// Fetch the last match once and print it
    Fetch {
        /// AoE4World profile id
        #[arg(short, long)]
        profile_id: u64,
    },
}
