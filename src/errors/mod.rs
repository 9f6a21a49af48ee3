use reqwest::StatusCode;
use thiserror::Error;

/// Failures while fetching or mapping the last game.
///
/// Every variant shares one retry policy: propagated on a first load,
/// swallowed on a background refresh where the last known game is kept.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("AoE4World returned status {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("malformed last-game payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("profile {profile_id} not found in any team of game {game_id}")]
    SubjectNotInTeams { profile_id: u64, game_id: u64 },
}
