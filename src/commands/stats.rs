//! Stats command: the target team's record per season, optionally broken
//! down by stadium or listed match by match.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use super::rivals::{season_meetings, stadium_label, Meeting};
use crate::{
    cli::types::Season,
    config::Config,
    core::{list_season_files, load_season},
    openliga::{Match, Side},
    Result,
};

/// Result of a played match from the target team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn from_score(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Win => "Victoria",
            Outcome::Draw => "Empate",
            Outcome::Loss => "Derrota",
        }
    }
}

/// Played/won/drawn/lost and goals, counting only matches with a final score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeasonRecord {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl SeasonRecord {
    pub fn add(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        match Outcome::from_score(goals_for, goals_against) {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub fn merge(&mut self, other: &SeasonRecord) {
        self.played += other.played;
        self.wins += other.wins;
        self.draws += other.draws;
        self.losses += other.losses;
        self.goals_for += other.goals_for;
        self.goals_against += other.goals_against;
    }

    pub fn render(&self) -> String {
        format!(
            "Partidos Jugados: {} | Victorias: {} | Empates: {} | Derrotas: {} | Goles a favor: {} | Goles en contra: {}",
            self.played, self.wins, self.draws, self.losses, self.goals_for, self.goals_against
        )
    }
}

/// Record of `team_name` over `matches`; unplayed matches are ignored.
pub fn season_record<'a>(
    matches: impl IntoIterator<Item = &'a Match>,
    team_name: &str,
) -> SeasonRecord {
    let mut record = SeasonRecord::default();
    for (goals_for, goals_against) in matches.into_iter().filter_map(|m| m.score_for(team_name)) {
        record.add(goals_for, goals_against);
    }
    record
}

/// Record at one stadium, split by whether the team was the home side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StadiumRecord {
    pub stadium: String,
    pub side: Side,
    #[serde(flatten)]
    pub record: SeasonRecord,
}

impl StadiumRecord {
    pub fn render(&self) -> String {
        format!("{:<9} {}: {}", self.side.label(), self.stadium, self.record.render())
    }
}

/// One entry per (side, stadium) the team played at, home grounds first and
/// then by stadium name. Unplayed matches list the stadium with a zero record.
pub fn stadium_records(matches: &[Match], team_name: &str) -> Vec<StadiumRecord> {
    let mut grouped: BTreeMap<(bool, String), SeasonRecord> = BTreeMap::new();
    for m in matches {
        let away = m.side_of(team_name) == Side::Away;
        let record = grouped
            .entry((away, stadium_label(m).to_string()))
            .or_default();
        if let Some((goals_for, goals_against)) = m.score_for(team_name) {
            record.add(goals_for, goals_against);
        }
    }

    grouped
        .into_iter()
        .map(|((away, stadium), record)| StadiumRecord {
            stadium,
            side: if away { Side::Away } else { Side::Home },
            record,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonStats {
    pub season: Option<Season>,
    pub label: String,
    #[serde(flatten)]
    pub record: SeasonRecord,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stadiums: Vec<StadiumRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<Meeting>,
}

/// What the stats command shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsOptions {
    /// Only this season.
    pub season: Option<Season>,
    /// Per-stadium home/away records under each season.
    pub by_stadium: bool,
    /// The season's matches as a table under each season.
    pub matches: bool,
    pub json: bool,
}

/// Stats for every season file, or just `options.season` when given.
pub fn collect_stats(config: &Config, options: &StatsOptions) -> Result<Vec<SeasonStats>> {
    let mut stats = Vec::new();
    for file in list_season_files(&config.output_dir)? {
        let season = file.season();
        if options.season.is_some() && season != options.season {
            continue;
        }
        let matches = load_season(&file.path)?;
        let team = config.team_name.as_str();
        stats.push(SeasonStats {
            season,
            label: file.season_label(),
            record: season_record(&matches, team),
            stadiums: if options.by_stadium {
                stadium_records(&matches, team)
            } else {
                Vec::new()
            },
            matches: if options.matches {
                season_meetings(&file, &matches, team)
            } else {
                Vec::new()
            },
        });
    }
    Ok(stats)
}

pub fn write_stats<W: Write>(config: &Config, options: &StatsOptions, out: &mut W) -> Result<()> {
    let stats = collect_stats(config, options)?;

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
        return Ok(());
    }

    if stats.is_empty() {
        match options.season {
            Some(season) => writeln!(out, "No hay datos para la temporada {}", season.label())?,
            None => writeln!(out, "No hay temporadas guardadas")?,
        }
        return Ok(());
    }

    for entry in &stats {
        writeln!(out, "{:>9}  {}", entry.label, entry.record.render())?;
        for stadium in &entry.stadiums {
            writeln!(out, "    {}", stadium.render())?;
        }
        if !entry.matches.is_empty() {
            writeln!(out, "    Fecha | Local | Marcador | Visitante | Estadio")?;
            for meeting in &entry.matches {
                writeln!(out, "  {}", meeting.render())?;
            }
        }
    }
    if options.season.is_none() && stats.len() > 1 {
        let mut total = SeasonRecord::default();
        for entry in &stats {
            total.merge(&entry.record);
        }
        writeln!(out, "{:>9}  {}", "Total", total.render())?;
    }
    Ok(())
}

/// Handle the stats command
pub fn handle_stats(config: &Config, options: &StatsOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_stats(config, options, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::save_season;
    use serde_json::json;
    use tempfile::TempDir;

    const KOLN: &str = "1. FC Köln";

    fn played(home: &str, away: &str, h: u32, a: u32) -> serde_json::Value {
        json!({
            "team1": { "teamName": home },
            "team2": { "teamName": away },
            "matchResults": [ { "resultTypeID": 2, "pointsTeam1": h, "pointsTeam2": a } ]
        })
    }

    fn parse_all(values: &[serde_json::Value]) -> Vec<Match> {
        values
            .iter()
            .map(|v| serde_json::from_value(v.clone()).unwrap())
            .collect()
    }

    #[test]
    fn test_outcome_from_score() {
        assert_eq!(Outcome::from_score(2, 1), Outcome::Win);
        assert_eq!(Outcome::from_score(1, 1), Outcome::Draw);
        assert_eq!(Outcome::from_score(0, 3), Outcome::Loss);
    }

    #[test]
    fn test_season_record_from_both_sides() {
        let matches = parse_all(&[
            played(KOLN, "Hertha BSC", 2, 0),
            played("Hamburger SV", KOLN, 1, 1),
            played("FC Schalke 04", KOLN, 0, 2),
            played(KOLN, "SV Werder Bremen", 1, 4),
        ]);

        let record = season_record(&matches, KOLN);
        assert_eq!(
            record,
            SeasonRecord {
                played: 4,
                wins: 2,
                draws: 1,
                losses: 1,
                goals_for: 6,
                goals_against: 5,
            }
        );
    }

    #[test]
    fn test_unplayed_matches_are_ignored() {
        let matches = parse_all(&[
            json!({ "team1": { "teamName": KOLN }, "team2": { "teamName": "X" }, "matchResults": [] }),
            json!({
                "team1": { "teamName": KOLN },
                "team2": { "teamName": "Y" },
                "matchResults": [ { "resultTypeID": 1, "pointsTeam1": 1, "pointsTeam2": 0 } ]
            }),
        ]);
        assert_eq!(season_record(&matches, KOLN), SeasonRecord::default());
    }

    #[test]
    fn test_write_stats_single_season_and_json() {
        let tmp = TempDir::new().unwrap();
        save_season(tmp.path(), Season::new(2019), &[played(KOLN, "A", 3, 0)]).unwrap();
        save_season(tmp.path(), Season::new(2020), &[played("B", KOLN, 2, 2)]).unwrap();
        let config = Config {
            output_dir: tmp.path().to_path_buf(),
            ..Config::default()
        };

        let mut out = Vec::new();
        let options = StatsOptions {
            season: Some(Season::new(2020)),
            ..StatsOptions::default()
        };
        write_stats(&config, &options, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("2020/2021"));
        assert!(text.contains("Empates: 1"));
        assert!(!text.contains("2019/2020"));

        let mut out = Vec::new();
        let options = StatsOptions {
            json: true,
            ..StatsOptions::default()
        };
        write_stats(&config, &options, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["season"], 2019);
        assert!(parsed[0].get("stadiums").is_none());
        assert!(parsed[0].get("matches").is_none());
        assert_eq!(parsed[0]["wins"], 1);
        assert_eq!(parsed[1]["draws"], 1);
    }

    #[test]
    fn test_write_stats_totals_across_seasons() {
        let tmp = TempDir::new().unwrap();
        save_season(tmp.path(), Season::new(2019), &[played(KOLN, "A", 3, 0)]).unwrap();
        save_season(tmp.path(), Season::new(2020), &[played("B", KOLN, 2, 1)]).unwrap();
        let config = Config {
            output_dir: tmp.path().to_path_buf(),
            ..Config::default()
        };

        let mut out = Vec::new();
        write_stats(&config, &StatsOptions::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let total = text.lines().last().unwrap();
        assert!(total.trim_start().starts_with("Total"));
        assert!(total.contains("Partidos Jugados: 2"));
        assert!(total.contains("Goles a favor: 4"));
    }

    #[test]
    fn test_write_stats_missing_season() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            output_dir: tmp.path().to_path_buf(),
            ..Config::default()
        };

        let mut out = Vec::new();
        let options = StatsOptions {
            season: Some(Season::new(1999)),
            ..StatsOptions::default()
        };
        write_stats(&config, &options, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No hay datos para la temporada 1999/2000\n"
        );
    }

    fn at(home: &str, away: &str, stadium: &str, score: Option<(u32, u32)>) -> serde_json::Value {
        let mut m = match score {
            Some((h, a)) => played(home, away, h, a),
            None => json!({ "team1": { "teamName": home }, "team2": { "teamName": away } }),
        };
        m["location"] = json!({ "locationStadium": stadium });
        m
    }

    #[test]
    fn test_stadium_records_split_home_and_away() {
        let matches = parse_all(&[
            at(KOLN, "Hertha BSC", "RheinEnergieSTADION", Some((2, 0))),
            at(KOLN, "Hamburger SV", "RheinEnergieSTADION", Some((1, 1))),
            at("VfL Bochum", KOLN, "Vonovia Ruhrstadion", Some((0, 3))),
            at("Borussia Dortmund", KOLN, "Signal Iduna Park", None),
            at("1. FC Heidenheim 1846", KOLN, "", Some((2, 1))),
        ]);

        let records = stadium_records(&matches, KOLN);
        let rows: Vec<(Side, &str, u32, u32, u32, u32)> = records
            .iter()
            .map(|r| {
                (
                    r.side,
                    r.stadium.as_str(),
                    r.record.played,
                    r.record.wins,
                    r.record.draws,
                    r.record.losses,
                )
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                (Side::Home, "RheinEnergieSTADION", 2, 1, 1, 0),
                (Side::Away, "Desconocido", 1, 0, 0, 1),
                (Side::Away, "Signal Iduna Park", 0, 0, 0, 0),
                (Side::Away, "Vonovia Ruhrstadion", 1, 1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_write_stats_by_stadium_and_matches() {
        let tmp = TempDir::new().unwrap();
        let mut later = at("VfL Bochum", KOLN, "Vonovia Ruhrstadion", Some((0, 3)));
        later["matchDateTime"] = json!("2023-09-23T15:30:00");
        let mut earlier = at(KOLN, "Hertha BSC", "RheinEnergieSTADION", None);
        earlier["matchDateTime"] = json!("2023-08-19T18:30:00");
        save_season(tmp.path(), Season::new(2023), &[later, earlier]).unwrap();
        let config = Config {
            output_dir: tmp.path().to_path_buf(),
            ..Config::default()
        };

        let options = StatsOptions {
            by_stadium: true,
            matches: true,
            ..StatsOptions::default()
        };
        let mut out = Vec::new();
        write_stats(&config, &options, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("2023/2024  Partidos Jugados: 1"));
        assert!(lines[1].starts_with("    Local     RheinEnergieSTADION: Partidos Jugados: 0"));
        assert!(lines[2].starts_with("    Visitante Vonovia Ruhrstadion: Partidos Jugados: 1 | Victorias: 1"));
        assert_eq!(lines[3], "    Fecha | Local | Marcador | Visitante | Estadio");
        assert_eq!(
            lines[4],
            "    2023-08-19 | 1. FC Köln | Pendiente | Hertha BSC | RheinEnergieSTADION"
        );
        assert_eq!(
            lines[5],
            "    2023-09-23 | VfL Bochum | 0 - 3 | 1. FC Köln | Vonovia Ruhrstadion | Victoria"
        );
        assert_eq!(lines.len(), 6);

        let options = StatsOptions {
            by_stadium: true,
            json: true,
            ..StatsOptions::default()
        };
        let mut out = Vec::new();
        write_stats(&config, &options, &mut out).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["stadiums"][1]["stadium"], "Vonovia Ruhrstadion");
        assert_eq!(parsed[0]["stadiums"][1]["side"], "Away");
        assert_eq!(parsed[0]["stadiums"][1]["wins"], 1);
    }
}
