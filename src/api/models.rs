use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Raw last-game response from AoE4World.
///
/// The upstream payload is loosely typed; fields that are sometimes missing
/// or null are defaulted here so that one absent field does not reject the
/// whole game. Raw structs never cross into the domain unmapped.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGame {
    pub game_id: u64,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub map: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub leaderboard: String,
    #[serde(default)]
    pub ongoing: bool,
    #[serde(default)]
    pub just_finished: bool,
    pub teams: Vec<Vec<RawParticipant>>,
    pub filters: RawFilters,
}

/// Filter block naming the subject the game was queried for
#[derive(Debug, Clone, Deserialize)]
pub struct RawFilters {
    #[serde(default)]
    pub profile_ids: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParticipant {
    pub name: String,
    pub profile_id: u64,
    #[serde(default)]
    pub civilization: String,
    /// "win", "loss", or anything else the upstream decides to send
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub modes: HashMap<String, RawModeStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawModeStats {
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub streak: Option<i64>,
    #[serde(default)]
    pub games_count: Option<i64>,
    #[serde(default)]
    pub wins_count: Option<i64>,
    #[serde(default)]
    pub losses_count: Option<i64>,
    #[serde(default)]
    pub win_rate: Option<f64>,
    #[serde(default)]
    pub rank_level: Option<String>,
}
