//! Rivals command: opponent list and head-to-head history across seasons.

use std::collections::BTreeSet;
use std::io::{self, Write};

use serde::Serialize;

use super::{
    report::{format_final_score, format_match_date},
    stats::{Outcome, SeasonRecord},
};
use crate::{
    config::Config,
    core::{load_all_seasons, SeasonFile},
    openliga::Match,
    Result,
};

/// Every opponent the team met, unique and sorted by name.
pub fn list_rivals(seasons: &[(SeasonFile, Vec<Match>)], team_name: &str) -> Vec<String> {
    seasons
        .iter()
        .flat_map(|(_, matches)| matches.iter())
        .filter_map(|m| m.opponent_of(team_name))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// One row of the head-to-head table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meeting {
    pub season: String,
    pub date: String,
    pub home: String,
    pub away: String,
    pub score: String,
    pub stadium: String,
    pub outcome: Option<Outcome>,
    #[serde(skip)]
    kickoff: String,
}

/// Stadium column value; blank names count as unknown.
pub fn stadium_label(m: &Match) -> &str {
    m.stadium()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Desconocido")
}

impl Meeting {
    pub fn from_match(season: &SeasonFile, m: &Match, team_name: &str) -> Self {
        let score = match m.final_result() {
            Some(_) => format_final_score(m),
            None => "Pendiente".to_string(),
        };
        Self {
            season: season.season_label(),
            date: format_match_date(m.match_date_time.as_deref()),
            home: m.team1_name().unwrap_or("?").to_string(),
            away: m.team2_name().unwrap_or("?").to_string(),
            score,
            stadium: stadium_label(m).to_string(),
            outcome: m
                .score_for(team_name)
                .map(|(gf, ga)| Outcome::from_score(gf, ga)),
            kickoff: m.date_key().to_string(),
        }
    }

    /// Always five columns; the outcome is a sixth only for played matches.
    pub fn render(&self) -> String {
        let row = format!(
            "  {} | {} | {} | {} | {}",
            self.date, self.home, self.score, self.away, self.stadium
        );
        match self.outcome {
            Some(outcome) => format!("{row} | {}", outcome.label()),
            None => row,
        }
    }
}

/// Every match of one season as table rows, oldest first by raw kickoff.
pub fn season_meetings(file: &SeasonFile, matches: &[Match], team_name: &str) -> Vec<Meeting> {
    let mut meetings: Vec<Meeting> = matches
        .iter()
        .map(|m| Meeting::from_match(file, m, team_name))
        .collect();
    meetings.sort_by(|a, b| a.kickoff.cmp(&b.kickoff));
    meetings
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHead {
    pub rival: String,
    pub record: SeasonRecord,
    /// Newest first.
    pub meetings: Vec<Meeting>,
}

/// All meetings between `team_name` and `rival`, newest first by raw kickoff.
pub fn head_to_head(
    seasons: &[(SeasonFile, Vec<Match>)],
    team_name: &str,
    rival: &str,
) -> HeadToHead {
    let mut record = SeasonRecord::default();
    let mut meetings = Vec::new();

    for (file, matches) in seasons {
        for m in matches.iter().filter(|m| m.is_between(team_name, rival)) {
            if let Some((goals_for, goals_against)) = m.score_for(team_name) {
                record.add(goals_for, goals_against);
            }
            meetings.push(Meeting::from_match(file, m, team_name));
        }
    }
    meetings.sort_by(|a, b| b.kickoff.cmp(&a.kickoff));

    HeadToHead {
        rival: rival.to_string(),
        record,
        meetings,
    }
}

pub fn write_rivals<W: Write>(
    config: &Config,
    rival: Option<&str>,
    as_json: bool,
    out: &mut W,
) -> Result<()> {
    let seasons = load_all_seasons(&config.output_dir)?;

    let Some(rival) = rival else {
        let rivals = list_rivals(&seasons, &config.team_name);
        if as_json {
            writeln!(out, "{}", serde_json::to_string_pretty(&rivals)?)?;
        } else {
            for name in &rivals {
                writeln!(out, "{name}")?;
            }
        }
        return Ok(());
    };

    let h2h = head_to_head(&seasons, &config.team_name, rival);
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(&h2h)?)?;
        return Ok(());
    }

    writeln!(out, "=== {} vs {} ===", config.team_name, h2h.rival)?;
    writeln!(out, "{}", h2h.record.render())?;
    if h2h.meetings.is_empty() {
        writeln!(out, "No se encontraron partidos contra este rival.")?;
    } else {
        writeln!(out, "  Fecha | Local | Marcador | Visitante | Estadio")?;
        for meeting in &h2h.meetings {
            writeln!(out, "{}", meeting.render())?;
        }
    }
    Ok(())
}

/// Handle the rivals command
pub fn handle_rivals(config: &Config, rival: Option<&str>, as_json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_rivals(config, rival, as_json, &mut out)?;
    out.flush()?;
    Ok(())
}
