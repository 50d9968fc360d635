// Report builder — orchestrates the pure analysis stages for one account.
//
// Given a raw data package, this module:
// 1. Detects the account's niche and content categories
// 2. Derives posting patterns and engagement metrics
// 3. Evaluates the achievement catalog and aggregates user stats
// 4. Generates wins, insights, and notifications
// 5. Builds the weekly performance comparison
// 6. Returns a complete AccountReport ready for rendering or storage

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::achievements::{self, Achievement, UserStats};
use crate::analysis::classify::{self, ContentCategory};
use crate::analysis::patterns::{self, PostingPatterns};
use crate::analysis::engagement;
use crate::insights::tips::TipSelector;
use crate::insights::{self, SmartInsight, SmartNotification, WeeklyWin};
use crate::model::{MediaPost, RawDataPackage};
use crate::weekly::{self, PeriodTotals, WeeklyPerformance};

/// Knobs for report generation, resolved from config by the CLI.
pub struct ReportOptions {
    /// How many top posts to include.
    pub top_posts: usize,
    /// Previously stored achievement instances, for unlock-timestamp
    /// carry-forward. Empty when the caller has no stored state.
    pub previous_achievements: Vec<Achievement>,
    /// Previous-period totals for the weekly comparison, when known.
    pub previous_period: Option<PeriodTotals>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_posts: 5,
            previous_achievements: vec![],
            previous_period: None,
        }
    }
}

/// Everything the pipeline derives for one account. Plain serializable data;
/// the rendering layer owns presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountReport {
    pub username: String,
    pub generated_at: String,
    pub niche: String,
    /// Media-type categories (a partition of the posts).
    pub content_categories: Vec<ContentCategory>,
    /// Caption-keyword categories (non-exclusive).
    pub topic_categories: Vec<ContentCategory>,
    pub patterns: PostingPatterns,
    pub engagement_rate: f64,
    pub top_posts: Vec<MediaPost>,
    pub achievements: Vec<Achievement>,
    pub stats: UserStats,
    pub wins: Vec<WeeklyWin>,
    pub insights: Vec<SmartInsight>,
    pub notifications: Vec<SmartNotification>,
    pub weekly: WeeklyPerformance,
}

/// Run the full pipeline over a raw data package.
///
/// Pure apart from the `info!` trace: same package, options, and `now`
/// always produce the same report.
pub fn build_report(
    package: &RawDataPackage,
    options: &ReportOptions,
    selector: &dyn TipSelector,
    now: DateTime<Utc>,
) -> AccountReport {
    let profile = &package.profile;
    let posts = &package.media;

    let niche = classify::detect_niche(posts);
    let content_categories = classify::categorize_by_bucket(posts);
    let topic_categories = classify::categorize_by_keywords(posts, classify::DEFAULT_NICHE_RULES);

    let posting_patterns = patterns::calculate_posting_patterns(posts);
    let engagement_rate = engagement::effective_engagement_rate(profile, posts);
    let top_posts: Vec<MediaPost> = engagement::top_posts(posts, options.top_posts)
        .into_iter()
        .cloned()
        .collect();

    let evaluated = achievements::evaluate(profile, posts, &package.history, now);
    let merged =
        achievements::merge_unlock_timestamps(&options.previous_achievements, evaluated, now);
    let stats = achievements::calculate_user_stats(&merged);

    let wins = insights::generate_weekly_wins(profile, posts);
    let smart = insights::generate_smart_insights(profile, posts, &posting_patterns);
    let notifications = insights::generate_notifications(profile, posts, &posting_patterns);

    let weekly = weekly::compare_periods(posts, options.previous_period, selector, now);

    info!(
        username = %profile.username,
        niche = %niche,
        engagement = format!("{:.2}", engagement_rate),
        unlocked = stats.total_unlocked,
        posts = posts.len(),
        "Analyzed account"
    );

    AccountReport {
        username: profile.username.clone(),
        generated_at: now.to_rfc3339(),
        niche,
        content_categories,
        topic_categories,
        patterns: posting_patterns,
        engagement_rate,
        top_posts,
        achievements: merged,
        stats,
        wins,
        insights: smart,
        notifications,
        weekly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::tips::Fixed;
    use crate::model::Profile;
    use chrono::TimeZone;

    #[test]
    fn report_over_empty_package_is_well_formed() {
        let package = RawDataPackage::default();
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let report = build_report(&package, &ReportOptions::default(), &Fixed(0), now);

        assert_eq!(report.niche, "general");
        assert!(report.content_categories.is_empty());
        assert!(report.top_posts.is_empty());
        // The fallback win is still present
        assert_eq!(report.wins.len(), 1);
        assert_eq!(report.engagement_rate, 0.0);
    }

    #[test]
    fn report_serializes_to_json() {
        let package = RawDataPackage {
            profile: Profile {
                username: "crafty.kate".to_string(),
                followers_count: 950,
                ..Default::default()
            },
            ..Default::default()
        };
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let report = build_report(&package, &ReportOptions::default(), &Fixed(0), now);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("crafty.kate"));
        assert!(json.contains("milestone_approaching"));
    }
}
