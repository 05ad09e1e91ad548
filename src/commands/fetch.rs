//! Fetch command: download the target team's matches season by season.
//!
//! For each season the configured leagues are tried in order; the first
//! league that yields matches for the team wins and the rest are skipped.
//! Seasons without matches leave no file behind.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    cli::types::{LeagueShortcut, Season},
    config::Config,
    core::{filter_team_matches, save_season},
    openliga::OpenLigaClient,
    Result,
};

/// A season file written during a fetch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedSeason {
    pub season: Season,
    pub league: LeagueShortcut,
    pub matches: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchSummary {
    pub saved: Vec<SavedSeason>,
    pub skipped: Vec<Season>,
}

/// Matches of the target team for one season, from the first league that has any.
pub async fn fetch_season(
    client: &OpenLigaClient,
    config: &Config,
    season: Season,
) -> Option<(LeagueShortcut, Vec<Value>)> {
    for league in &config.leagues {
        let payload = client.fetch_matches(league, season).await;
        let matches = filter_team_matches(&payload, config.team_id);
        if !matches.is_empty() {
            return Some((league.clone(), matches));
        }
        info!(%league, %season, "no matches for team in league");
    }
    None
}

/// Walk every configured season and write one file per season with data.
///
/// Network failures never abort the run; failing to write a file does.
pub async fn run_fetch(config: &Config, client: &OpenLigaClient) -> Result<FetchSummary> {
    let mut summary = FetchSummary::default();
    info!(
        first = %config.seasons.start(),
        last = %config.seasons.end(),
        leagues = config.leagues.len(),
        "starting fetch"
    );

    for season in config.seasons.iter() {
        info!(%season, "processing season");

        match fetch_season(client, config, season).await {
            Some((league, matches)) => {
                let path = save_season(&config.output_dir, season, &matches)?;
                info!(
                    %season,
                    %league,
                    count = matches.len(),
                    path = %path.display(),
                    "saved season"
                );
                summary.saved.push(SavedSeason {
                    season,
                    league,
                    matches: matches.len(),
                    path,
                });
            }
            None => {
                warn!(%season, team = %config.team_name, "no matches found in any league");
                summary.skipped.push(season);
            }
        }
    }

    Ok(summary)
}

/// Handle the fetch command
pub async fn handle_fetch(config: &Config, verbose: bool) -> Result<FetchSummary> {
    let client = OpenLigaClient::new(config.api_base_url.as_str(), config.timeout)?;

    println!(
        "Fetching {} matches for seasons {} to {} from {}...",
        config.team_name,
        config.seasons.start().label(),
        config.seasons.end().label(),
        client.base_url()
    );

    // tarpaulin::skip - HTTP/file I/O call, tested via integration tests
    let summary = run_fetch(config, &client).await?;

    println!(
        "✓ Saved {} season file(s) to {}",
        summary.saved.len(),
        config.output_dir.display()
    );

    if verbose {
        for saved in &summary.saved {
            println!(
                "  {} ({}): {} matches -> {}",
                saved.season.label(),
                saved.league,
                saved.matches,
                saved.path.display()
            );
        }
        if !summary.skipped.is_empty() {
            let skipped: Vec<String> = summary.skipped.iter().map(|s| s.to_string()).collect();
            println!("  No data for: {}", skipped.join(", "));
        }
    }

    Ok(summary)
}
