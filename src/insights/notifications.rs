// Actionable notifications — nudges the dashboard surfaces as cards.
//
// Milestone proximity watches the follower ladder from two sides: within 5%
// below a threshold ("almost there") and within 5% above it ("you just made
// it"). The two windows are half-open and disjoint, so at most one fires per
// threshold.

use serde::{Deserialize, Serialize};

use crate::achievements::engine::follower_milestone_thresholds;
use crate::analysis::patterns::PostingPatterns;
use crate::analysis::{classify, engagement};
use crate::model::{MediaPost, Profile};

/// Proximity window around a milestone, as a fraction of the threshold.
const MILESTONE_WINDOW: f64 = 0.05;

/// Below this engagement rate (percent) the low-engagement reminder fires.
const LOW_ENGAGEMENT_PERCENT: f64 = 3.0;

/// A bucket taking less than this share of the feed counts as underused.
const UNDERUSED_SHARE: f64 = 0.20;

/// One actionable nudge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartNotification {
    /// Stable kind tag: "posting_time", "content_opportunity",
    /// "milestone_approaching", "milestone_reached", "low_engagement".
    pub kind: String,
    pub title: String,
    pub message: String,
    /// Expected impact of acting on it (0.0-1.0), used for card ordering.
    pub impact: f64,
    pub action: String,
}

/// Generate the notification set for an account.
pub fn generate_notifications(
    profile: &Profile,
    posts: &[MediaPost],
    patterns: &PostingPatterns,
) -> Vec<SmartNotification> {
    let mut notifications = Vec::new();

    // Optimal posting time, from the hour histogram
    if let Some(hour) = patterns.top_hours.first() {
        notifications.push(SmartNotification {
            kind: "posting_time".to_string(),
            title: "Prime Time".to_string(),
            message: format!(
                "Your audience is most active around {hour}:00. Post then for \
                 the biggest first-hour push."
            ),
            impact: 0.7,
            action: "Schedule your next post".to_string(),
        });
    }

    // Content opportunity: a format that outperforms but is underused
    if let Some(n) = content_opportunity(posts) {
        notifications.push(n);
    }

    // Milestone proximity over the follower ladder
    notifications.extend(milestone_proximity(profile.followers_count));

    // Low-engagement reminder — only meaningful when there are posts to
    // engage with
    if !posts.is_empty() {
        let rate = engagement::effective_engagement_rate(profile, posts);
        if rate < LOW_ENGAGEMENT_PERCENT {
            notifications.push(SmartNotification {
                kind: "low_engagement".to_string(),
                title: "Engagement Needs Attention".to_string(),
                message: format!(
                    "Your engagement rate is {rate:.1}%. Conversation starters and \
                     quick replies are the fastest levers."
                ),
                impact: 0.6,
                action: "Reply to recent comments".to_string(),
            });
        }
    }

    notifications
}

/// Find an outperforming-but-underused content bucket, if any.
fn content_opportunity(posts: &[MediaPost]) -> Option<SmartNotification> {
    if posts.is_empty() {
        return None;
    }
    let overall_avg = engagement::average_engagement(posts);
    let total = posts.len() as f64;

    classify::categorize_by_bucket(posts)
        .into_iter()
        .filter(|c| {
            (c.post_count as f64) / total < UNDERUSED_SHARE && c.avg_engagement > overall_avg
        })
        .max_by(|a, b| {
            a.avg_engagement
                .partial_cmp(&b.avg_engagement)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|c| SmartNotification {
            kind: "content_opportunity".to_string(),
            title: "Untapped Format".to_string(),
            message: format!(
                "Your {} posts average {:.0} engagement against {:.0} overall, yet \
                 they're under a fifth of your feed. Make more.",
                c.label, c.avg_engagement, overall_avg
            ),
            impact: 0.75,
            action: format!("Plan another {} post", c.label),
        })
}

/// Emit approaching / just-reached notifications across the follower ladder.
///
/// Approaching: 0.95·t <= followers < t. Just reached: t <= followers < 1.05·t.
fn milestone_proximity(followers: u64) -> Vec<SmartNotification> {
    let f = followers as f64;
    let mut notifications = Vec::new();

    for threshold in follower_milestone_thresholds() {
        let t = threshold as f64;
        if f >= t * (1.0 - MILESTONE_WINDOW) && f < t {
            notifications.push(SmartNotification {
                kind: "milestone_approaching".to_string(),
                title: "Milestone In Sight".to_string(),
                message: format!(
                    "Only {} followers to go until {}. One good post could do it.",
                    threshold - followers,
                    threshold
                ),
                impact: 0.8,
                action: "Post something shareable".to_string(),
            });
        } else if f >= t && f < t * (1.0 + MILESTONE_WINDOW) {
            notifications.push(SmartNotification {
                kind: "milestone_reached".to_string(),
                title: "Milestone Crossed".to_string(),
                message: format!("You just passed {threshold} followers. Take a moment to celebrate."),
                impact: 0.9,
                action: "Share the milestone".to_string(),
            });
        }
    }

    notifications
}
