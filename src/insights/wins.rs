// Weekly wins — short celebratory highlights for the top of the report.
//
// Always produces at least one win: accounts with no media get a follower
// shout-out instead of an empty list.

use serde::{Deserialize, Serialize};

use crate::analysis::engagement;
use crate::model::{MediaPost, Profile};

/// Engagement rate at or above this earns explicit praise.
const PRAISE_RATE_PERCENT: f64 = 3.0;

/// A single celebratory highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyWin {
    /// Stable kind tag: "best_post", "engagement_rate", "growth_milestone".
    pub kind: String,
    pub title: String,
    pub message: String,
    /// How confident we are this is worth celebrating (0.0-1.0).
    pub confidence: f64,
}

/// Generate the weekly wins for an account.
pub fn generate_weekly_wins(profile: &Profile, posts: &[MediaPost]) -> Vec<WeeklyWin> {
    // Fallback: no media at all still deserves one win, not an empty list
    if posts.is_empty() {
        return vec![WeeklyWin {
            kind: "growth_milestone".to_string(),
            title: "Nice Following!".to_string(),
            message: format!(
                "{} people follow you — that's a real audience. Keep showing up.",
                profile.followers_count
            ),
            confidence: 0.8,
        }];
    }

    let mut wins = Vec::new();

    if let Some(best) = engagement::best_post(posts) {
        wins.push(WeeklyWin {
            kind: "best_post".to_string(),
            title: "Top Post of the Week".to_string(),
            message: format!(
                "Your best post earned {} likes and {} comments.",
                best.like_count, best.comment_count
            ),
            confidence: 0.9,
        });
    }

    let rate = engagement::effective_engagement_rate(profile, posts);
    if rate >= PRAISE_RATE_PERCENT {
        wins.push(WeeklyWin {
            kind: "engagement_rate".to_string(),
            title: "Engagement On Fire".to_string(),
            message: format!(
                "Your {:.1}% engagement rate beats the typical 1-3% range.",
                rate
            ),
            confidence: 0.85,
        });
    }

    wins
}
