//! Typed view of OpenLigaDB `getmatchdata` records.
//!
//! Every field is optional: the API omits or nulls fields freely, and a
//! field with an unexpected shape is read as absent instead of failing the
//! whole record.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;


/// `resultTypeID` of the regulation-time (final) result. Type 1 is half time.
pub const REGULATION_TIME_RESULT_TYPE: u32 = 2;

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, deserialize_with = "lenient")]
    pub team_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub team_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(rename = "resultTypeID", default, deserialize_with = "lenient")]
    pub result_type_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub points_team1: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub points_team2: Option<u32>,
}

impl MatchResult {
    pub fn is_regulation_time(&self) -> bool {
        self.result_type_id == Some(REGULATION_TIME_RESULT_TYPE)
    }
}

/// A goal with the running score right after it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default, deserialize_with = "lenient")]
    pub goal_getter_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub score_team1: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub score_team2: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, deserialize_with = "lenient")]
    pub location_city: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location_stadium: Option<String>,
}

/// One fixture. `team1` is the home side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default, deserialize_with = "lenient")]
    pub team1: Option<Team>,
    #[serde(default, deserialize_with = "lenient")]
    pub team2: Option<Team>,
    #[serde(default, deserialize_with = "lenient")]
    pub match_date_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub match_results: Vec<MatchResult>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub goals: Vec<Goal>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<Location>,
}

/// Which side of a fixture the target team played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "Local",
            Side::Away => "Visitante",
        }
    }
}

impl Match {
    pub fn team1_name(&self) -> Option<&str> {
        self.team1.as_ref()?.team_name.as_deref()
    }

    pub fn team2_name(&self) -> Option<&str> {
        self.team2.as_ref()?.team_name.as_deref()
    }

    pub fn team1_id(&self) -> Option<u32> {
        self.team1.as_ref()?.team_id
    }

    pub fn team2_id(&self) -> Option<u32> {
        self.team2.as_ref()?.team_id
    }

    /// Raw kickoff string used as sort key; absent sorts as `""`.
    pub fn date_key(&self) -> &str {
        self.match_date_time.as_deref().unwrap_or("")
    }

    pub fn stadium(&self) -> Option<&str> {
        self.location.as_ref()?.location_stadium.as_deref()
    }

    /// First regulation-time result, if the match has been played.
    pub fn final_result(&self) -> Option<&MatchResult> {
        self.match_results.iter().find(|r| r.is_regulation_time())
    }

    /// Home when `team1` is exactly `team_name`, away otherwise.
    pub fn side_of(&self, team_name: &str) -> Side {
        if self.team1_name() == Some(team_name) {
            Side::Home
        } else {
            Side::Away
        }
    }

    /// Name of the team on the other side from `team_name`.
    pub fn opponent_of(&self, team_name: &str) -> Option<&str> {
        match self.side_of(team_name) {
            Side::Home => self.team2_name(),
            Side::Away => self.team1_name(),
        }
    }

    /// Final score as `(goals for, goals against)` from `team_name`'s side.
    pub fn score_for(&self, team_name: &str) -> Option<(u32, u32)> {
        let result = self.final_result()?;
        let (home, away) = (result.points_team1?, result.points_team2?);
        match self.side_of(team_name) {
            Side::Home => Some((home, away)),
            Side::Away => Some((away, home)),
        }
    }

    /// True when one side is `team_name` and the other is `rival`.
    pub fn is_between(&self, team_name: &str, rival: &str) -> bool {
        let (t1, t2) = (self.team1_name(), self.team2_name());
        (t1 == Some(team_name) && t2 == Some(rival)) || (t1 == Some(rival) && t2 == Some(team_name))
    }
}
