use std::sync::Arc;

use log::debug;

use crate::domain::CurrentGame;

/// Last known good game for the active subject (stale-while-revalidate).
///
/// While a refresh is outstanding the cached value stays authoritative for
/// display. A resolution arriving for a subject that is no longer active is
/// dropped by the merge instead of overwriting the new subject's state.
#[derive(Debug, Default)]
pub struct GameCache {
    profile_id: Option<u64>,
    value: Option<Arc<CurrentGame>>,
    in_flight: bool,
}

impl GameCache {
    /// Create an empty cache bound to no subject
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the cache to a subject, dropping any previous subject's game
    pub fn bind(&mut self, profile_id: u64) {
        if self.profile_id != Some(profile_id) {
            self.profile_id = Some(profile_id);
            self.value = None;
            self.in_flight = false;
        }
    }

    /// Snapshot the previous value for an outgoing fetch.
    /// The first fetch for a subject is a first load, everything after a
    /// background refresh.
    pub fn begin_fetch(&mut self) -> Previous {
        self.in_flight = true;
        Previous {
            refetching: self.value.is_some(),
            value: self.value.clone(),
        }
    }

    /// Merge a resolved fetch into the cache.
    /// Returns false when the resolution belongs to a stale subject and was
    /// dropped.
    pub fn resolve(&mut self, profile_id: u64, game: Arc<CurrentGame>) -> bool {
        if self.profile_id != Some(profile_id) {
            debug!("Dropping stale resolution for profile {}", profile_id);
            return false;
        }
        self.in_flight = false;
        self.value = Some(game);
        true
    }

    /// Record a failed fetch without touching the cached value
    pub fn resolve_failure(&mut self, profile_id: u64) {
        if self.profile_id == Some(profile_id) {
            self.in_flight = false;
        }
    }

    pub fn value(&self) -> Option<&Arc<CurrentGame>> {
        self.value.as_ref()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }
}

/// Snapshot handed to the fetcher: the last known game plus whether this
/// call is a background refresh
#[derive(Debug, Clone, Default)]
pub struct Previous {
    pub value: Option<Arc<CurrentGame>>,
    pub refetching: bool,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::api::models::{RawFilters, RawGame, RawParticipant};
    use crate::domain::build_current_game;

    use super::*;

    fn game(id: u64, subject_id: u64) -> Arc<CurrentGame> {
        let raw = RawGame {
            game_id: id,
            started_at: Utc::now(),
            duration: Some(60),
            map: "Lipany".to_string(),
            kind: "rm_1v1".to_string(),
            leaderboard: "rm_solo".to_string(),
            ongoing: true,
            just_finished: false,
            teams: vec![
                vec![RawParticipant {
                    name: "subject".to_string(),
                    profile_id: subject_id,
                    civilization: "rus".to_string(),
                    result: None,
                    modes: Default::default(),
                }],
                vec![RawParticipant {
                    name: "foe".to_string(),
                    profile_id: subject_id + 1,
                    civilization: "mongols".to_string(),
                    result: None,
                    modes: Default::default(),
                }],
            ],
            filters: RawFilters {
                profile_ids: vec![subject_id],
            },
        };
        Arc::new(build_current_game(&raw, Utc::now(), chrono::Duration::hours(6)).unwrap())
    }

    #[test]
    fn first_fetch_is_a_first_load() {
        let mut cache = GameCache::new();
        cache.bind(7);
        let previous = cache.begin_fetch();
        assert!(!previous.refetching);
        assert!(previous.value.is_none());
        assert!(cache.in_flight());
    }

    #[test]
    fn later_fetches_are_refreshes_carrying_the_last_value() {
        let mut cache = GameCache::new();
        cache.bind(7);
        cache.begin_fetch();
        assert!(cache.resolve(7, game(1, 7)));

        let previous = cache.begin_fetch();
        assert!(previous.refetching);
        assert_eq!(previous.value.unwrap().id, 1);
    }

    #[test]
    fn stale_subject_resolution_is_dropped() {
        let mut cache = GameCache::new();
        cache.bind(7);
        cache.begin_fetch();
        cache.bind(8);

        assert!(!cache.resolve(7, game(1, 7)));
        assert!(cache.value().is_none());
    }

    #[test]
    fn rebinding_to_a_new_subject_clears_the_value() {
        let mut cache = GameCache::new();
        cache.bind(7);
        cache.begin_fetch();
        cache.resolve(7, game(1, 7));

        cache.bind(9);
        assert!(cache.value().is_none());
        let previous = cache.begin_fetch();
        assert!(!previous.refetching);
    }

    #[test]
    fn failure_keeps_the_cached_value_untouched() {
        let mut cache = GameCache::new();
        cache.bind(7);
        cache.begin_fetch();
        let known = game(1, 7);
        cache.resolve(7, Arc::clone(&known));

        cache.begin_fetch();
        cache.resolve_failure(7);
        assert!(!cache.in_flight());
        assert!(Arc::ptr_eq(cache.value().unwrap(), &known));
    }
}
