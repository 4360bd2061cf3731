use std::path::PathBuf;

use clap::Parser;

/// Fetch the film catalog and print it.
#[derive(Debug, Parser)]
#[command(name = "cinefetch", version, about = "Fetch and display the film catalog")]
pub struct Cli {
    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Print the fetched catalog as JSON instead of the text view.
    #[arg(long)]
    pub json: bool,

    /// Keep running after the first fetch; Enter re-fetches, 'q' quits.
    #[arg(long)]
    pub interactive: bool,
}
