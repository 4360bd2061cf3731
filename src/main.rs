mod cli;
mod logging;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

use cinefetch::config::Config;
use cinefetch::fetch::{FetchController, FetchState, HttpTransport};
use cinefetch::render::render;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    let mut catalog = config.catalog;
    if let Some(endpoint) = cli.endpoint.clone() {
        catalog.endpoint = endpoint;
    }

    let transport = Arc::new(HttpTransport::new(
        catalog.connect_timeout(),
        catalog.request_timeout(),
    ));
    let controller = FetchController::new(transport, catalog.endpoint);
    let mut states = controller.subscribe();

    // First fetch starts immediately; --interactive re-triggers after it.
    controller.trigger();
    report(&cli, &mut states).await?;

    if cli.interactive {
        println!();
        println!("Press Enter to fetch again, or type 'q' to quit.");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim() == "q" {
                break;
            }
            controller.trigger();
            report(&cli, &mut states).await?;
        }
    }

    Ok(())
}

/// Print each state change until the fetch settles.
///
/// Intermediate states (`Loading`) may be coalesced away by the watch
/// channel when the fetch settles quickly; only the settled state is
/// guaranteed to print.
async fn report(cli: &Cli, states: &mut watch::Receiver<FetchState>) -> anyhow::Result<()> {
    loop {
        states.changed().await?;
        let state = states.borrow_and_update().clone();

        if !state.is_settled() {
            println!("{}", render(&state));
            continue;
        }

        match state.movies() {
            Some(movies) if cli.json => println!("{}", serde_json::to_string_pretty(movies)?),
            _ => println!("{}", render(&state)),
        }
        return Ok(());
    }
}
