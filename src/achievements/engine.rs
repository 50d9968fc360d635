// Achievement evaluation — a pure rule pass over the static catalog.
//
// No state machine and no persistence: every call evaluates the full catalog
// fresh against the supplied data. The evaluator never stamps `unlocked_at`;
// diffing against previously stored state and timestamping first unlocks is
// the caller's job (see `stats::merge_unlock_timestamps`).
//
// Two ladders are conditional:
// - Growth tiers need ≥2 history snapshots with a nonzero earlier count;
//   without that they are absent from the result, not locked.
// - Consistency tiers only appear for accounts with ≥7 posts total.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{
    self, AchievementCategory, AchievementDef, Difficulty, CONSISTENCY_TIERS,
    CONTENT_VOLUME_TIERS, DIVERSITY, ENGAGEMENT_TIERS, FOLLOWER_MILESTONES, GROWTH_TIERS,
    VIRAL_POST_TIERS,
};
use crate::model::{MediaPost, Profile, ProfileSnapshot};

/// An evaluated achievement instance, ready for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: AchievementCategory,
    pub difficulty: Difficulty,
    pub unlocked: bool,
    pub progress: Option<u64>,
    pub max_progress: Option<u64>,
    /// Present only when unlocked.
    pub share_text: Option<String>,
    /// Never set by `evaluate`; stamped by the caller via
    /// `merge_unlock_timestamps` when an unlock is first observed.
    pub unlocked_at: Option<String>,
}

fn instance(def: &AchievementDef, unlocked: bool, progress: Option<(u64, u64)>) -> Achievement {
    Achievement {
        id: def.id.to_string(),
        title: def.title.to_string(),
        description: def.description.to_string(),
        icon: def.icon.to_string(),
        category: def.category,
        difficulty: def.difficulty,
        unlocked,
        progress: progress.map(|(p, _)| p),
        max_progress: progress.map(|(_, m)| m),
        share_text: unlocked.then(|| def.share_text.to_string()),
        unlocked_at: None,
    }
}

/// Evaluate the full catalog against a profile, its posts, and optional
/// follower history. `now` anchors the trailing consistency window; the CLI
/// passes `Utc::now()`, tests pass a fixed instant.
pub fn evaluate(
    profile: &Profile,
    posts: &[MediaPost],
    history: &[ProfileSnapshot],
    now: DateTime<Utc>,
) -> Vec<Achievement> {
    let mut achievements = Vec::new();

    // Follower milestones: the whole ladder, every call
    let followers = profile.followers_count;
    for (threshold, def) in FOLLOWER_MILESTONES {
        achievements.push(instance(
            def,
            followers >= *threshold,
            Some((followers.min(*threshold), *threshold)),
        ));
    }

    // Engagement-rate tiers against the profile's stated rate
    for (threshold, def) in ENGAGEMENT_TIERS {
        achievements.push(instance(def, profile.engagement_rate >= *threshold, None));
    }

    // Viral-post tiers: against the single best post. Skipped entirely when
    // there are no posts — there is nothing to reduce over.
    if let Some(best) = posts.iter().map(|p| p.engagement()).max() {
        for (threshold, def) in VIRAL_POST_TIERS {
            achievements.push(instance(
                def,
                best >= *threshold,
                Some((best.min(*threshold), *threshold)),
            ));
        }
    }

    // Content-volume tiers plus format diversity
    let post_count = posts.len() as u64;
    for (threshold, def) in CONTENT_VOLUME_TIERS {
        achievements.push(instance(
            def,
            post_count >= *threshold,
            Some((post_count.min(*threshold), *threshold)),
        ));
    }
    let distinct_types: HashSet<_> = posts.iter().map(|p| p.media_type).collect();
    let distinct = distinct_types.len() as u64;
    achievements.push(instance(
        &DIVERSITY,
        distinct >= 2,
        Some((distinct.min(2), 2)),
    ));

    // Growth tiers: absent without comparative data
    if let Some(growth_pct) = follower_growth_percent(history) {
        for (threshold, def) in GROWTH_TIERS {
            achievements.push(instance(def, growth_pct >= *threshold, None));
        }
    }

    // Consistency tiers: trailing 30-day window, gated on total volume
    if posts.len() >= 7 {
        let window_start = now - Duration::days(30);
        let recent = posts
            .iter()
            .filter_map(|p| p.published_at())
            .filter(|t| *t >= window_start && *t <= now)
            .count() as u64;
        for (threshold, def) in CONSISTENCY_TIERS {
            achievements.push(instance(
                def,
                recent >= *threshold,
                Some((recent.min(*threshold), *threshold)),
            ));
        }
    }

    achievements
}

/// Percentage follower growth between the oldest and newest snapshots.
///
/// None when there are fewer than two snapshots or the earlier count is
/// zero — growth cannot be synthesized without comparative data.
fn follower_growth_percent(history: &[ProfileSnapshot]) -> Option<f64> {
    if history.len() < 2 {
        return None;
    }
    let earliest = history.first()?.followers_count;
    let latest = history.last()?.followers_count;
    if earliest == 0 {
        return None;
    }
    Some((latest as f64 - earliest as f64) / earliest as f64 * 100.0)
}

/// Convenience for callers that only want the ladder thresholds (e.g. the
/// milestone-proximity notifications).
pub fn follower_milestone_thresholds() -> Vec<u64> {
    catalog::follower_thresholds().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn profile(followers: u64, rate: f64) -> Profile {
        Profile {
            followers_count: followers,
            engagement_rate: rate,
            ..Default::default()
        }
    }

    fn by_id<'a>(achievements: &'a [Achievement], id: &str) -> &'a Achievement {
        achievements
            .iter()
            .find(|a| a.id == id)
            .unwrap_or_else(|| panic!("missing achievement {id}"))
    }

    #[test]
    fn follower_ladder_always_emits_all_tiers() {
        let achievements = evaluate(&profile(1_200, 0.0), &[], &[], now());
        let milestones: Vec<_> = achievements
            .iter()
            .filter(|a| a.category == AchievementCategory::Milestone)
            .collect();
        assert_eq!(milestones.len(), 7);
        assert!(by_id(&achievements, "followers_1k").unlocked);
        assert!(!by_id(&achievements, "followers_5k").unlocked);
    }

    #[test]
    fn locked_milestone_carries_progress() {
        let achievements = evaluate(&profile(750, 0.0), &[], &[], now());
        let a = by_id(&achievements, "followers_1k");
        assert!(!a.unlocked);
        assert_eq!(a.progress, Some(750));
        assert_eq!(a.max_progress, Some(1_000));
        assert!(a.share_text.is_none());
    }

    #[test]
    fn viral_tiers_skipped_for_empty_posts() {
        let achievements = evaluate(&profile(100, 0.0), &[], &[], now());
        assert!(achievements.iter().all(|a| !a.id.starts_with("viral_")));
    }

    #[test]
    fn viral_tier_uses_best_post() {
        let posts = vec![
            MediaPost {
                id: "video".to_string(),
                like_count: 90,
                comment_count: 10,
                ..Default::default()
            },
            MediaPost {
                id: "image".to_string(),
                like_count: 280,
                comment_count: 20,
                ..Default::default()
            },
        ];
        let achievements = evaluate(&profile(100, 0.0), &posts, &[], now());
        assert!(by_id(&achievements, "viral_100").unlocked);
        assert!(!by_id(&achievements, "viral_500").unlocked);
    }

    #[test]
    fn growth_absent_without_history() {
        let achievements = evaluate(&profile(100, 0.0), &[], &[], now());
        assert!(achievements
            .iter()
            .all(|a| a.category != AchievementCategory::Growth));
    }

    #[test]
    fn growth_absent_when_earlier_snapshot_is_zero() {
        let history = vec![
            ProfileSnapshot {
                followers_count: 0,
                taken_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
            ProfileSnapshot {
                followers_count: 500,
                taken_at: "2024-06-01T00:00:00+00:00".to_string(),
            },
        ];
        let achievements = evaluate(&profile(500, 0.0), &[], &history, now());
        assert!(achievements
            .iter()
            .all(|a| a.category != AchievementCategory::Growth));
    }

    #[test]
    fn growth_tiers_unlock_from_history() {
        let history = vec![
            ProfileSnapshot {
                followers_count: 1_000,
                taken_at: "2024-01-01T00:00:00+00:00".to_string(),
            },
            ProfileSnapshot {
                followers_count: 1_300,
                taken_at: "2024-06-01T00:00:00+00:00".to_string(),
            },
        ];
        // 30% growth: 5/10/25 unlock, 50 stays locked
        let achievements = evaluate(&profile(1_300, 0.0), &[], &history, now());
        assert!(by_id(&achievements, "growth_25").unlocked);
        assert!(!by_id(&achievements, "growth_50").unlocked);
    }

    #[test]
    fn consistency_absent_below_seven_posts() {
        let posts: Vec<MediaPost> = (0..6)
            .map(|i| MediaPost {
                id: format!("{i}"),
                timestamp: Some("2024-06-10T10:00:00+00:00".to_string()),
                ..Default::default()
            })
            .collect();
        let achievements = evaluate(&profile(100, 0.0), &posts, &[], now());
        assert!(achievements
            .iter()
            .all(|a| a.category != AchievementCategory::Consistency));
    }

    #[test]
    fn consistency_counts_only_trailing_window() {
        // 7 posts total; 4 recent, 3 well outside the 30-day window
        let mut posts: Vec<MediaPost> = (0..4)
            .map(|i| MediaPost {
                id: format!("recent-{i}"),
                timestamp: Some(format!("2024-06-{:02}T10:00:00+00:00", 10 + i)),
                ..Default::default()
            })
            .collect();
        posts.extend((0..3).map(|i| MediaPost {
            id: format!("old-{i}"),
            timestamp: Some("2024-01-01T10:00:00+00:00".to_string()),
            ..Default::default()
        }));

        let achievements = evaluate(&profile(100, 0.0), &posts, &[], now());
        let weekly = by_id(&achievements, "consistency_7");
        assert!(!weekly.unlocked);
        assert_eq!(weekly.progress, Some(4));
    }

    #[test]
    fn engagement_tiers_monotonic() {
        let achievements = evaluate(&profile(100, 6.5), &[], &[], now());
        assert!(by_id(&achievements, "engagement_2").unlocked);
        assert!(by_id(&achievements, "engagement_4").unlocked);
        assert!(by_id(&achievements, "engagement_6").unlocked);
        assert!(!by_id(&achievements, "engagement_10").unlocked);
    }

    #[test]
    fn diversity_needs_two_formats() {
        use crate::model::MediaType;
        let uniform: Vec<MediaPost> = (0..3).map(|_| MediaPost::default()).collect();
        let achievements = evaluate(&profile(100, 0.0), &uniform, &[], now());
        assert!(!by_id(&achievements, "format_explorer").unlocked);

        let mixed = vec![
            MediaPost::default(),
            MediaPost {
                media_type: MediaType::Video,
                ..Default::default()
            },
        ];
        let achievements = evaluate(&profile(100, 0.0), &mixed, &[], now());
        assert!(by_id(&achievements, "format_explorer").unlocked);
    }

    #[test]
    fn evaluator_never_stamps_unlocked_at() {
        let achievements = evaluate(&profile(100_000, 10.0), &[], &[], now());
        assert!(achievements.iter().all(|a| a.unlocked_at.is_none()));
    }
}
