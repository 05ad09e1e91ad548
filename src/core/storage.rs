//! Season result files on disk.
//!
//! Layout: `<output-dir>/koln_<season>.json`, one pretty-printed JSON array
//! of raw match records per season.

use serde_json::Value;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    cli::types::Season,
    error::{KolnError, Result},
    openliga::Match,
};


pub const SEASON_FILE_PREFIX: &str = "koln_";
pub const SEASON_FILE_SUFFIX: &str = ".json";

pub fn season_file_name(season: Season) -> String {
    format!("{SEASON_FILE_PREFIX}{season}{SEASON_FILE_SUFFIX}")
}

/// Path: <output-dir>/koln_{season}.json
pub fn season_file_path(dir: &Path, season: Season) -> PathBuf {
    dir.join(season_file_name(season))
}

/// Write a string to file, replacing any previous content in one step.
///
/// The data goes to a sibling `.tmp` file first and is renamed over `path`,
/// so readers see either the old file or the complete new one.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut f = fs::File::create(&tmp)?;
    f.write_all(contents.as_bytes())?;
    f.sync_all()?;
    drop(f);

    fs::rename(&tmp, path)
}

/// Save one season's matches, overwriting whatever was there.
pub fn save_season(dir: &Path, season: Season, matches: &[Value]) -> Result<PathBuf> {
    let path = season_file_path(dir, season);
    let json = serde_json::to_string_pretty(matches)?;
    write_string(&path, &json)?;
    debug!(path = %path.display(), count = matches.len(), "season file written");
    Ok(path)
}

/// A `koln_*.json` file found in the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonFile {
    pub file_name: String,
    pub path: PathBuf,
}

impl SeasonFile {
    fn stem(&self) -> &str {
        self.file_name
            .strip_prefix(SEASON_FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(SEASON_FILE_SUFFIX))
            .unwrap_or(&self.file_name)
    }

    /// Season encoded in the file name, if it is a plain year.
    pub fn season(&self) -> Option<Season> {
        self.stem().parse().ok()
    }

    /// `2023/2024` for `koln_2023.json`; the bare stem when it is not a year.
    pub fn season_label(&self) -> String {
        match self.season() {
            Some(season) => season.label(),
            None => self.stem().to_string(),
        }
    }
}

/// Season files in `dir`, sorted by file name.
///
/// Names embed four-digit years, so lexicographic order is season order.
pub fn list_season_files(dir: &Path) -> Result<Vec<SeasonFile>> {
    if !dir.is_dir() {
        return Err(KolnError::MissingOutputDir {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(file_name) = entry.file_name().into_string() else {
            continue;
        };
        if file_name.starts_with(SEASON_FILE_PREFIX) && file_name.ends_with(SEASON_FILE_SUFFIX) {
            files.push(SeasonFile {
                path: entry.path(),
                file_name,
            });
        }
    }
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

fn read_season<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| KolnError::SeasonFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Raw records exactly as saved.
pub fn load_season_values(path: &Path) -> Result<Vec<Value>> {
    read_season(path)
}

/// Typed records; a file that is not a JSON array of objects is an error.
pub fn load_season(path: &Path) -> Result<Vec<Match>> {
    read_season(path)
}

/// Every season file in `dir`, in season order, with its matches.
pub fn load_all_seasons(dir: &Path) -> Result<Vec<(SeasonFile, Vec<Match>)>> {
    list_season_files(dir)?
        .into_iter()
        .map(|file| {
            let matches = load_season(&file.path)?;
            Ok((file, matches))
        })
        .collect()
}
