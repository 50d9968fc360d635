// Aggregation over evaluated achievements — unlock-timestamp merging and
// the weighted user score.
//
// `evaluate` produces unlock booleans only. Turning "unlocked now" into
// "unlocked since <when>" requires the previously stored instances, which
// only the caller has. The merge here is that explicit step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engine::Achievement;
use crate::achievements::catalog::Difficulty;

/// Aggregate counters over a set of evaluated achievements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStats {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
    pub platinum: u32,
    pub total_unlocked: u32,
    /// Weighted score: bronze=10, silver=25, gold=50, platinum=100.
    pub score: u32,
    /// The most recently unlocked achievement, by `unlocked_at`. None until
    /// timestamps have been merged in.
    pub latest: Option<Achievement>,
}

/// Carry stored unlock timestamps forward onto a freshly evaluated list and
/// stamp `now` on first unlocks.
///
/// Rules, per achievement id:
/// - unlocked now, had a stored timestamp -> keep the stored timestamp
/// - unlocked now, no stored timestamp     -> stamp `now` (first unlock)
/// - locked now                            -> no timestamp, regardless of history
pub fn merge_unlock_timestamps(
    previous: &[Achievement],
    current: Vec<Achievement>,
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    let stamp = now.to_rfc3339();
    current
        .into_iter()
        .map(|mut achievement| {
            if achievement.unlocked {
                let stored = previous
                    .iter()
                    .find(|p| p.id == achievement.id && p.unlocked)
                    .and_then(|p| p.unlocked_at.clone());
                achievement.unlocked_at = Some(stored.unwrap_or_else(|| stamp.clone()));
            } else {
                achievement.unlocked_at = None;
            }
            achievement
        })
        .collect()
}

/// Sum unlocked achievements per difficulty and apply the fixed weight table.
pub fn calculate_user_stats(achievements: &[Achievement]) -> UserStats {
    let mut stats = UserStats {
        bronze: 0,
        silver: 0,
        gold: 0,
        platinum: 0,
        total_unlocked: 0,
        score: 0,
        latest: None,
    };

    for achievement in achievements.iter().filter(|a| a.unlocked) {
        match achievement.difficulty {
            Difficulty::Bronze => stats.bronze += 1,
            Difficulty::Silver => stats.silver += 1,
            Difficulty::Gold => stats.gold += 1,
            Difficulty::Platinum => stats.platinum += 1,
        }
        stats.total_unlocked += 1;
        stats.score += achievement.difficulty.score_weight();
    }

    // RFC 3339 UTC timestamps compare correctly as strings
    stats.latest = achievements
        .iter()
        .filter(|a| a.unlocked && a.unlocked_at.is_some())
        .max_by(|a, b| a.unlocked_at.cmp(&b.unlocked_at))
        .cloned();

    stats
}
