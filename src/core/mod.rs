//! Core utilities shared by the commands
//!
//! - `filters`: selecting the target team's matches from API payloads
//! - `storage`: reading and writing per-season JSON files

pub mod filters;
pub mod storage;

pub use filters::{filter_team_matches, involves_team};
pub use storage::{
    list_season_files, load_all_seasons, load_season, load_season_values, save_season,
    season_file_path, SeasonFile,
};
