//! Match, team, and player models.

use serde::{Deserialize, Serialize};

/// A scheduled match as returned by `GET /v1/matches`.
///
/// `start_date` and `end_date` are fixed-width ISO datetime strings
/// (`YYYY-MM-DDTHH:MM:SS`, no timezone suffix). The date/time accessors
/// below slice them at known character offsets instead of parsing; that is
/// the documented contract with the backend, not general datetime handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_id: String,
    pub sport: String,
    pub start_date: String,
    pub end_date: String,
    pub venue_id: String,
    pub court_id: String,
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// One side of a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// A player on a team roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub user_id: String,
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "pictureURL", default)]
    pub picture_url: Option<String>,
}

impl Match {
    /// Calendar date of the match: chars [0,10) of the ISO start datetime.
    pub fn start_day(&self) -> &str {
        iso_slice(&self.start_date, 0, 10)
    }

    /// Start time `HH:MM`: chars [11,16) of the ISO start datetime.
    pub fn start_time(&self) -> &str {
        iso_slice(&self.start_date, 11, 16)
    }

    /// End time `HH:MM`: chars [11,16) of the ISO end datetime.
    pub fn end_time(&self) -> &str {
        iso_slice(&self.end_date, 11, 16)
    }

    /// Display names of every player across all teams, in team order and
    /// then roster order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.teams
            .iter()
            .flat_map(|team| team.players.iter())
            .map(|player| player.display_name.as_str())
    }
}

/// Fixed-offset slice of a well-formed ISO datetime string. Empty when the
/// input is shorter than expected.
fn iso_slice(s: &str, start: usize, end: usize) -> &str {
    s.get(start..end).unwrap_or("")
}
