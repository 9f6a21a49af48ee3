use super::models::ModeStats;

const DEFAULT_RANK_LEVEL: &str = "unranked";

/// Derive the display rank for a player on the given leaderboard.
///
/// Only the solo and team ranked queues carry a badge; every other
/// leaderboard kind yields no rank at all. A missing rank level (or missing
/// stats block) degrades to "unranked" rather than failing.
pub fn derive_rank(leaderboard: &str, stats: Option<&ModeStats>) -> Option<String> {
    let prefix = match leaderboard {
        "rm_solo" => "solo",
        "rm_team" => "team",
        _ => return None,
    };
    let level = stats
        .and_then(|s| s.rank_level.as_deref())
        .unwrap_or(DEFAULT_RANK_LEVEL);
    Some(format!("{prefix}_{level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_with_level(level: &str) -> ModeStats {
        ModeStats {
            rating: Some(1200),
            rank: Some(345),
            streak: Some(2),
            games_count: None,
            wins_count: None,
            losses_count: None,
            win_rate: None,
            rank_level: Some(level.to_string()),
        }
    }

    #[test]
    fn solo_rank_uses_rank_level() {
        let stats = stats_with_level("unranked");
        assert_eq!(
            derive_rank("rm_solo", Some(&stats)).as_deref(),
            Some("solo_unranked")
        );
    }

    #[test]
    fn team_rank_uses_rank_level() {
        let stats = stats_with_level("plat_3");
        assert_eq!(
            derive_rank("rm_team", Some(&stats)).as_deref(),
            Some("team_plat_3")
        );
    }

    #[test]
    fn missing_stats_default_to_unranked() {
        assert_eq!(derive_rank("rm_solo", None).as_deref(), Some("solo_unranked"));
        assert_eq!(derive_rank("rm_team", None).as_deref(), Some("team_unranked"));
    }

    #[test]
    fn other_leaderboards_have_no_rank() {
        let stats = stats_with_level("conq_1");
        assert_eq!(derive_rank("qm_2v2", Some(&stats)), None);
        assert_eq!(derive_rank("other_leaderboard", None), None);
    }
}
