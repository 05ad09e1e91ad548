//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use koln_matches::{
    cli::{Commands, KolnCli},
    commands::{
        fetch::handle_fetch,
        report::handle_report,
        rivals::handle_rivals,
        stats::{handle_stats, StatsOptions},
    },
    KolnError,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = KolnCli::parse();
    let config = app.config().context("invalid configuration")?;

    let result = match &app.command {
        Commands::Fetch { verbose, .. } => handle_fetch(&config, *verbose).await.map(|_| ()),
        Commands::Report => handle_report(&config),
        Commands::Stats {
            season,
            by_stadium,
            matches,
            json,
        } => handle_stats(
            &config,
            &StatsOptions {
                season: *season,
                by_stadium: *by_stadium,
                matches: *matches,
                json: *json,
            },
        ),
        Commands::Rivals { rival, json } => handle_rivals(&config, rival.as_deref(), *json),
    };

    if let Err(err) = result {
        report_error(&err);
        std::process::exit(1);
    }
    Ok(())
}

/// The error on one line, then what to do about it when there is a hint.
fn report_error(err: &KolnError) {
    eprintln!("Error: {err}");
    if let Some(hint) = err.hint() {
        eprintln!("{hint}");
    }
}
