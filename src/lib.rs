//! 1. FC Köln match archive
//!
//! Downloads a club's fixtures from the [OpenLigaDB](https://api.openligadb.de)
//! API into one JSON file per season, then reads those files back to print
//! season summaries, records and head-to-head histories.
//!
//! ## Features
//!
//! - **Fetch**: per season, try each league in priority order and keep the
//!   first one that has matches for the club
//! - **Report**: chronological per-season listing with scores and goals
//! - **Stats**: wins, draws, losses and goals per season
//! - **Rivals**: opponent list and head-to-head records
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use koln_matches::{commands::fetch::handle_fetch, commands::report::handle_report, Config};
//!
//! # async fn example() -> koln_matches::Result<()> {
//! let config = Config::default().validated()?;
//! handle_fetch(&config, false).await?;
//! handle_report(&config)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export KOLN_OUTPUT_DIR=/data/partidos_koln
//! export KOLN_TEAM_ID=65
//! export KOLN_TEAM_NAME="1. FC Köln"
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod openliga;

// Re-export commonly used types
pub use cli::types::{LeagueShortcut, Season, SeasonRange, TeamId};
pub use config::Config;
pub use error::{KolnError, Result};
pub use openliga::{Match, OpenLigaClient};

pub const OUTPUT_DIR_ENV_VAR: &str = "KOLN_OUTPUT_DIR";
pub const TEAM_ID_ENV_VAR: &str = "KOLN_TEAM_ID";
pub const TEAM_NAME_ENV_VAR: &str = "KOLN_TEAM_NAME";
pub const API_URL_ENV_VAR: &str = "KOLN_API_URL";
