//! OpenLigaDB API access and match record types.

pub mod http;
pub mod types;

pub use http::{FetchError, OpenLigaClient};
pub use types::{Goal, Location, Match, MatchResult, Side, Team, REGULATION_TIME_RESULT_TYPE};
