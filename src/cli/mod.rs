//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use types::{LeagueShortcut, Season, SeasonRange, TeamId};

use crate::{
    config::{
        Config, DEFAULT_API_BASE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_TEAM_ID, DEFAULT_TEAM_NAME,
        DEFAULT_TIMEOUT_SECS,
    },
    Result, API_URL_ENV_VAR, OUTPUT_DIR_ENV_VAR, TEAM_ID_ENV_VAR, TEAM_NAME_ENV_VAR,
};

/// Options every command understands.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Directory holding the `koln_<season>.json` files.
    #[clap(long, short, global = true, env = OUTPUT_DIR_ENV_VAR, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// OpenLigaDB team ID of the club to follow.
    #[clap(long, global = true, env = TEAM_ID_ENV_VAR, default_value_t = TeamId::new(DEFAULT_TEAM_ID))]
    pub team_id: TeamId,

    /// Team name as OpenLigaDB spells it; decides home/away in reports.
    #[clap(long, global = true, env = TEAM_NAME_ENV_VAR, default_value = DEFAULT_TEAM_NAME)]
    pub team_name: String,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download the club's matches into one JSON file per season.
    ///
    /// Leagues are tried in the given order; the first one that has matches
    /// for the club is used and the rest are skipped for that season.
    Fetch {
        /// League shortcut, in priority order (repeatable): `-l bl1 -l bl2`.
        #[clap(long = "league", short = 'l', default_values = ["bl1", "bl2"])]
        leagues: Vec<LeagueShortcut>,

        /// Seasons to fetch: `2000-2024` or a single year.
        #[clap(long, short, default_value_t = SeasonRange::default())]
        seasons: SeasonRange,

        /// OpenLigaDB base URL.
        #[clap(long, env = API_URL_ENV_VAR, default_value = DEFAULT_API_BASE_URL)]
        api_url: String,

        /// Per-request timeout in seconds.
        #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// List every saved and skipped season when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Print a chronological summary of every saved season.
    Report,

    /// Show the club's record (wins, draws, losses, goals) per season.
    Stats {
        /// Only this season (e.g. 2023).
        #[clap(long, short)]
        season: Option<Season>,

        /// Break each season down by stadium, home and away.
        #[clap(long)]
        by_stadium: bool,

        /// List each season's matches as a table.
        #[clap(long)]
        matches: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List opponents, or show the head-to-head history against one.
    Rivals {
        /// Opponent name exactly as stored (see `rivals` without arguments).
        #[clap(long, short)]
        rival: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "koln-matches",
    about = "Archive and summarise 1. FC Köln matches from OpenLigaDB"
)]
pub struct KolnCli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

impl KolnCli {
    /// Build the run configuration from the parsed arguments.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config {
            team_id: self.common.team_id,
            team_name: self.common.team_name.clone(),
            output_dir: self.common.output_dir.clone(),
            ..Config::default()
        };

        if let Commands::Fetch {
            leagues,
            seasons,
            api_url,
            timeout_secs,
            ..
        } = &self.command
        {
            config.leagues = leagues.clone();
            config.seasons = *seasons;
            config.api_base_url = api_url.clone();
            config.timeout = Duration::from_secs(*timeout_secs);
        }

        config.validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_defaults_match_config_defaults() {
        let cli = KolnCli::try_parse_from(["koln-matches", "fetch"]).unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.leagues, Config::default().leagues);
        assert_eq!(config.seasons, SeasonRange::default());
        assert_eq!(config.team_id, TeamId::new(65));
    }

    #[test]
    fn test_fetch_overrides() {
        let cli = KolnCli::try_parse_from([
            "koln-matches",
            "fetch",
            "-l",
            "bl2",
            "--seasons",
            "2010-2012",
            "--api-url",
            "http://localhost:9000/",
            "--timeout-secs",
            "3",
            "--output-dir",
            "out",
        ])
        .unwrap();
        let config = cli.config().unwrap();
        let leagues: Vec<&str> = config.leagues.iter().map(|l| l.as_str()).collect();
        assert_eq!(leagues, vec!["bl2"]);
        assert_eq!(config.seasons.to_string(), "2010-2012");
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_report_takes_no_arguments() {
        let cli = KolnCli::try_parse_from(["koln-matches", "report"]).unwrap();
        assert!(matches!(cli.command, Commands::Report));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(KolnCli::try_parse_from(["koln-matches", "fetch", "-s", "2024-2000"]).is_err());
        assert!(KolnCli::try_parse_from(["koln-matches", "fetch", "-l", "bl/1"]).is_err());
        assert!(KolnCli::try_parse_from(["koln-matches", "stats", "-s", "soon"]).is_err());
    }

    #[test]
    fn test_stats_view_flags() {
        let cli = KolnCli::try_parse_from([
            "koln-matches",
            "stats",
            "-s",
            "2023",
            "--by-stadium",
            "--matches",
        ])
        .unwrap();
        match cli.command {
            Commands::Stats {
                season,
                by_stadium,
                matches,
                json,
            } => {
                assert_eq!(season, Some(Season::new(2023)));
                assert!(by_stadium);
                assert!(matches);
                assert!(!json);
            }
            other => panic!("Expected Stats, got {other:?}"),
        }
    }

    #[test]
    fn test_rivals_arguments() {
        let cli =
            KolnCli::try_parse_from(["koln-matches", "rivals", "-r", "Hamburger SV", "--json"])
                .unwrap();
        match cli.command {
            Commands::Rivals { rival, json } => {
                assert_eq!(rival.as_deref(), Some("Hamburger SV"));
                assert!(json);
            }
            other => panic!("Expected Rivals, got {other:?}"),
        }
    }
}
