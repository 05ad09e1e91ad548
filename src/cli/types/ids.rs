//! ID types for OpenLigaDB teams and leagues.

use crate::error::{KolnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for OpenLigaDB team IDs.
///
/// # Examples
///
/// ```rust
/// use koln_matches::TeamId;
///
/// let team_id = TeamId::new(65);
/// assert_eq!(team_id.as_u32(), 65);
/// assert_eq!(team_id.to_string(), "65");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = KolnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// League shortcut as used in OpenLigaDB URLs (`bl1`, `bl2`, ...).
///
/// The value ends up as a URL path segment, so only ASCII letters, digits,
/// `-` and `_` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueShortcut(String);

impl LeagueShortcut {
    pub fn new(shortcut: impl Into<String>) -> Result<Self> {
        let shortcut = shortcut.into();
        let valid = !shortcut.is_empty()
            && shortcut
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(shortcut))
        } else {
            Err(KolnError::InvalidLeague { shortcut })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueShortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LeagueShortcut {
    type Err = KolnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}
