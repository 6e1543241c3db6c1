//! Presence status definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use occ_core::error::AppError;

/// Presence status of a single connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresenceStatus {
    /// Connected and active.
    Online,
    /// Connected but marked away.
    Away,
}

impl PresenceStatus {
    /// Converts to the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Away => "Away",
        }
    }

    /// Whether this status counts as online.
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl fmt::Display for PresenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresenceStatus {
    type Err = AppError;

    /// Parses case-insensitively; anything other than online/away is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "away" => Ok(Self::Away),
            other => Err(AppError::validation(format!(
                "Unknown presence status '{other}'"
            ))),
        }
    }
}
