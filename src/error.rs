//! Error types for the Köln match archive

use std::path::PathBuf;

use thiserror::Error;


pub type Result<T> = std::result::Result<T, KolnError>;

#[derive(Error, Debug)]
pub enum KolnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Output directory '{}' does not exist", .path.display())]
    MissingOutputDir { path: PathBuf },

    #[error("Season file {} could not be parsed: {source}", .path.display())]
    SeasonFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid season range: {start} is after {end}")]
    InvalidSeasonRange { start: u16, end: u16 },

    #[error("Invalid league shortcut: '{shortcut}'")]
    InvalidLeague { shortcut: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl KolnError {
    /// What the user can do about this error, printed after the error itself.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            KolnError::MissingOutputDir { .. } => {
                Some("Run `koln-matches fetch` first to download the season files.")
            }
            _ => None,
        }
    }
}
