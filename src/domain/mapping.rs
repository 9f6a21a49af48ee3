use chrono::{DateTime, Duration, Utc};
use log::debug;

use crate::api::models::{RawGame, RawModeStats, RawParticipant};
use crate::config::resolve_civilization;
use crate::errors::FetchError;

use super::models::{CurrentGame, GameResult, ModeStats, Player};
use super::rank::derive_rank;

/// Map a raw last-game payload into the strict domain model.
///
/// The subject is located by matching the payload's own filter block against
/// all teams; its team becomes `team` (subject included), every other team
/// flattened in upstream order becomes `opponents`. A subject missing from
/// all teams is a mapping fault for this poll.
pub fn build_current_game(
    raw: &RawGame,
    now: DateTime<Utc>,
    today_window: Duration,
) -> Result<CurrentGame, FetchError> {
    let subject = raw
        .teams
        .iter()
        .flatten()
        .find(|p| raw.filters.profile_ids.contains(&p.profile_id))
        .ok_or(FetchError::SubjectNotInTeams {
            profile_id: raw.filters.profile_ids.first().copied().unwrap_or(0),
            game_id: raw.game_id,
        })?;

    let mut team = Vec::new();
    let mut opponents = Vec::new();
    for raw_team in &raw.teams {
        let is_subject_team = raw_team.iter().any(|p| p.profile_id == subject.profile_id);
        let side = if is_subject_team { &mut team } else { &mut opponents };
        side.extend(raw_team.iter().map(|p| map_player(p, &raw.leaderboard)));
    }

    Ok(CurrentGame {
        id: raw.game_id,
        duration: raw.duration,
        today: is_recent(raw.started_at, now, today_window),
        player: map_player(subject, &raw.leaderboard),
        team,
        opponents,
        map: raw.map.clone(),
        kind: display_kind(&raw.kind),
        ongoing: raw.ongoing,
        recently_finished: raw.just_finished,
    })
}

fn map_player(raw: &RawParticipant, leaderboard: &str) -> Player {
    let mode_stats = raw.modes.get(leaderboard).map(map_mode_stats);
    debug!("Mapping {} on {}: {:?}", raw.name, leaderboard, mode_stats);

    Player {
        name: raw.name.clone(),
        civilization: resolve_civilization(&raw.civilization),
        rank: derive_rank(leaderboard, mode_stats.as_ref()),
        result: map_result(raw.result.as_deref()),
        mode_stats,
        profile_id: raw.profile_id,
    }
}

fn map_mode_stats(raw: &RawModeStats) -> ModeStats {
    ModeStats {
        rating: raw.rating,
        rank: raw.rank,
        streak: raw.streak,
        games_count: raw.games_count,
        wins_count: raw.wins_count,
        losses_count: raw.losses_count,
        win_rate: raw.win_rate,
        rank_level: raw.rank_level.clone(),
    }
}

/// Unknown result strings degrade to no result rather than failing the map
fn map_result(raw: Option<&str>) -> Option<GameResult> {
    match raw {
        Some("win") => Some(GameResult::Win),
        Some("loss") => Some(GameResult::Loss),
        _ => None,
    }
}

/// Whether a game that started at `started_at` is still within the recency
/// window at `now`
pub fn is_recent(started_at: DateTime<Utc>, now: DateTime<Utc>, window: Duration) -> bool {
    started_at > now - window
}

/// Reformat a queue category for display by replacing separators with spaces
pub fn display_kind(kind: &str) -> String {
    kind.replace('_', " ")
}
