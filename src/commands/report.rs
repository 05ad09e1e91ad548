//! Report command: print a chronological summary of every saved season.

use std::io::{self, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{
    config::Config,
    core::{list_season_files, load_season, SeasonFile},
    openliga::Match,
    Result,
};


const SEASON_RULE: &str = "========================================";
const MATCH_RULE: &str = "--------------------";

/// Layouts tried after [`normalize_timestamp`], with and without a UTC offset.
const OFFSET_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Bring an ISO-8601 timestamp into a shape chrono's layouts accept: `T` as
/// the separator, `Z` spelled as `+00:00`, and an hour-only time padded with
/// `:00` minutes. `None` when the first ten characters cannot be a date.
fn normalize_timestamp(raw: &str) -> Option<String> {
    let date = raw.get(..10)?;
    let rest = raw.get(10..)?;
    if rest.is_empty() {
        return Some(date.to_string());
    }

    let time = rest.strip_prefix(['T', ' '])?;
    let time = match time.strip_suffix('Z') {
        Some(t) => format!("{t}+00:00"),
        None => time.to_string(),
    };
    let hour_only = time
        .get(..2)
        .is_some_and(|h| h.bytes().all(|b| b.is_ascii_digit()))
        && !time[2..].starts_with(':');
    let time = if hour_only {
        format!("{}:00{}", &time[..2], &time[2..])
    } else {
        time
    };
    Some(format!("{date}T{time}"))
}

fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    let ts = normalize_timestamp(raw)?;
    if ts.len() == 10 {
        return NaiveDate::parse_from_str(&ts, "%Y-%m-%d").ok();
    }
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&ts, fmt).ok())
        .map(|dt| dt.date_naive())
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(&ts, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// `YYYY-MM-DD` for an ISO-8601 timestamp, the raw text when it does not parse.
pub fn format_match_date(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => parse_match_date(raw)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => String::new(),
    }
}

fn points(value: Option<u32>) -> String {
    value.map_or_else(|| "?".to_string(), |v| v.to_string())
}

/// Regulation-time score as `"a - b"`, or `"N/A"` if the match has none.
pub fn format_final_score(m: &Match) -> String {
    match m.final_result() {
        Some(result) => format!(
            "{} - {}",
            points(result.points_team1),
            points(result.points_team2)
        ),
        None => "N/A".to_string(),
    }
}

/// Stable sort by the raw `matchDateTime` string.
///
/// Zero-padded ISO timestamps sort chronologically as text; malformed or
/// missing values do not (missing sorts first).
pub fn sort_by_kickoff(matches: &mut [Match]) {
    matches.sort_by(|a, b| a.date_key().cmp(b.date_key()));
}

/// One match block, without the trailing separator.
pub fn render_match(m: &Match, team_name: &str) -> String {
    let team1 = m.team1_name().unwrap_or("?");
    let team2 = m.team2_name().unwrap_or("?");
    let side = m.side_of(team_name);
    let rival = m.opponent_of(team_name).unwrap_or("?");

    let mut lines = vec![
        format!(
            "  {} | {} vs {} | ({} vs {})",
            format_match_date(m.match_date_time.as_deref()),
            team1,
            team2,
            side.label(),
            rival
        ),
        format!("    Resultado Final: {}", format_final_score(m)),
    ];

    if m.goals.is_empty() {
        lines.push("    Goles: (No hay datos de goles)".to_string());
    } else {
        lines.push("    Goles:".to_string());
        for goal in &m.goals {
            lines.push(format!(
                "    - {} (marcador: {}-{})",
                goal.goal_getter_name.as_deref().unwrap_or("Desconocido"),
                points(goal.score_team1),
                points(goal.score_team2)
            ));
        }
    }

    lines.join("\n")
}

/// Season banner followed by every match in the given order.
pub fn render_season(file: &SeasonFile, matches: &[Match], team_name: &str) -> String {
    let mut out = format!(
        "\n{SEASON_RULE}\n     TEMPORADA {}\n{SEASON_RULE}\n",
        file.season_label()
    );
    for m in matches {
        out.push_str(&render_match(m, team_name));
        out.push('\n');
        out.push_str(MATCH_RULE);
        out.push('\n');
    }
    out
}

/// Write the full report for `config.output_dir` to `out`.
///
/// Fails before writing anything when the directory does not exist. A season
/// file that cannot be parsed stops the report at that season.
pub fn write_report<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let files = list_season_files(&config.output_dir)?;

    writeln!(
        out,
        "=== RESUMEN DE PARTIDOS DEL {} ===",
        config.team_name.to_uppercase()
    )?;

    for file in &files {
        let mut matches = load_season(&file.path)?;
        sort_by_kickoff(&mut matches);
        write!(out, "{}", render_season(file, &matches, &config.team_name))?;
    }

    Ok(())
}

/// Handle the report command
pub fn handle_report(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(config, &mut out)?;
    out.flush()?;
    Ok(())
}
