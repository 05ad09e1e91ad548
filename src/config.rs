//! Run configuration shared by every command.
//!
//! A [`Config`] is built once at startup (defaults, then environment, then
//! CLI flags) and handed to the commands by reference.

use std::path::PathBuf;
use std::time::Duration;

use crate::{
    cli::types::{LeagueShortcut, SeasonRange, TeamId},
    error::{KolnError, Result},
};

/// 1. FC Köln in OpenLigaDB.
pub const DEFAULT_TEAM_ID: u32 = 65;
pub const DEFAULT_TEAM_NAME: &str = "1. FC Köln";
/// Bundesliga first, then 2. Bundesliga.
pub const DEFAULT_LEAGUES: [&str; 2] = ["bl1", "bl2"];
pub const DEFAULT_OUTPUT_DIR: &str = "partidos_koln";
pub const DEFAULT_API_BASE_URL: &str = "https://api.openligadb.de";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Matches are kept when either side carries this id.
    pub team_id: TeamId,
    /// Used for home/away detection when rendering; must name the same club as `team_id`.
    pub team_name: String,
    /// Tried in order per season; the first league with matches wins.
    pub leagues: Vec<LeagueShortcut>,
    pub seasons: SeasonRange,
    pub output_dir: PathBuf,
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            team_id: TeamId::new(DEFAULT_TEAM_ID),
            team_name: DEFAULT_TEAM_NAME.to_string(),
            leagues: DEFAULT_LEAGUES
                .iter()
                .map(|l| LeagueShortcut::new(*l))
                .collect::<Result<Vec<_>>>()
                .unwrap_or_default(),
            seasons: SeasonRange::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Check cross-field constraints and normalise the base URL.
    pub fn validated(mut self) -> Result<Self> {
        if self.team_name.trim().is_empty() {
            return Err(KolnError::InvalidConfig {
                message: "team name must not be empty".to_string(),
            });
        }
        if self.leagues.is_empty() {
            return Err(KolnError::InvalidConfig {
                message: "at least one league shortcut is required".to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(KolnError::InvalidConfig {
                message: "request timeout must be greater than zero".to_string(),
            });
        }
        let trimmed = self.api_base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(KolnError::InvalidConfig {
                message: "API base URL must not be empty".to_string(),
            });
        }
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }
}
