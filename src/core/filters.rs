//! Team filtering over raw `getmatchdata` payloads.
//!
//! Filtering works on untyped JSON so the records saved to disk are exactly
//! what the API sent.

use serde_json::Value;

use crate::cli::types::TeamId;

/// `teamId` of `team1` or `team2`, read defensively.
fn team_id(record: &Value, side: &str) -> Option<u64> {
    record.get(side)?.get("teamId")?.as_u64()
}

/// True when either side of `record` is `team`.
pub fn involves_team(record: &Value, team: TeamId) -> bool {
    let target = u64::from(team.as_u32());
    team_id(record, "team1") == Some(target) || team_id(record, "team2") == Some(target)
}

/// Keep the matches in which `team` plays, in input order.
///
/// Anything other than a JSON array yields an empty list.
pub fn filter_team_matches(matches: &Value, team: TeamId) -> Vec<Value> {
    match matches.as_array() {
        Some(items) => items
            .iter()
            .filter(|record| involves_team(record, team))
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}
