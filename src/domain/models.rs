use serde::Serialize;

/// Display metadata for a faction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Civilization {
    pub name: String,
    pub short_name: String,
    /// Static asset reference, absent for unknown factions
    pub flag: Option<String>,
    pub color: String,
    pub key: String,
}

/// Win/loss outcome for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
}

/// Per-leaderboard statistics for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeStats {
    pub rating: Option<i64>,
    pub rank: Option<i64>,
    pub streak: Option<i64>,
    pub games_count: Option<i64>,
    pub wins_count: Option<i64>,
    pub losses_count: Option<i64>,
    pub win_rate: Option<f64>,
    pub rank_level: Option<String>,
}

/// One participant of the current game, fully resolved for display.
/// Built once per poll from the raw payload and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub civilization: Civilization,
    pub mode_stats: Option<ModeStats>,
    /// Derived display rank, e.g. "solo_plat_3"; absent for unranked queues
    pub rank: Option<String>,
    pub result: Option<GameResult>,
    pub profile_id: u64,
}

/// The current or most recent game of the tracked subject.
///
/// `team` always contains the subject exactly once; `opponents` is the
/// flattened union of all other teams in upstream order, disjoint from
/// `team`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentGame {
    pub id: u64,
    /// Elapsed seconds, absent while the upstream has not reported any
    pub duration: Option<u64>,
    /// Whether the game started inside the recency window
    pub today: bool,
    pub team: Vec<Player>,
    pub opponents: Vec<Player>,
    pub player: Player,
    pub map: String,
    /// Queue category reformatted for display ("rm_1v1" -> "rm 1v1")
    pub kind: String,
    pub ongoing: bool,
    pub recently_finished: bool,
}
