//! Type-safe wrappers for seasons, leagues and team identifiers.

pub mod ids;
pub mod time;


pub use ids::{LeagueShortcut, TeamId};
pub use time::{Season, SeasonRange};
