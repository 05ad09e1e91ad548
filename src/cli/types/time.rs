//! Season types for football league years.

use crate::error::{KolnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A football season, identified by the calendar year it starts in.
///
/// `Season(2000)` is the 2000/2001 season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Human label, e.g. `2023/2024`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.0, u32::from(self.0) + 1)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = KolnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Inclusive range of seasons, parsed from `2000-2024` or a single `2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRange {
    start: Season,
    end: Season,
}

impl SeasonRange {
    pub fn new(start: Season, end: Season) -> Result<Self> {
        if start > end {
            return Err(KolnError::InvalidSeasonRange {
                start: start.as_u16(),
                end: end.as_u16(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Season {
        self.start
    }

    pub fn end(&self) -> Season {
        self.end
    }

    /// Seasons in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Season> {
        (self.start.as_u16()..=self.end.as_u16()).map(Season::new)
    }
}

impl Default for SeasonRange {
    fn default() -> Self {
        Self {
            start: Season(2000),
            end: Season(2024),
        }
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for SeasonRange {
    type Err = KolnError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('-') {
            Some((start, end)) => Self::new(start.parse()?, end.parse()?),
            None => {
                let season: Season = s.parse()?;
                Self::new(season, season)
            }
        }
    }
}
