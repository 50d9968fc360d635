// Weekly performance — current vs. previous period aggregates with deltas.
//
// Percentage change guards its denominator: a previous value of zero yields
// 0%, never a division error. The smart tip comes through the injected
// TipSelector so the result stays deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::engagement;
use crate::insights::tips::{TipSelector, WEEKLY_TIPS};
use crate::model::MediaPost;

/// Aggregate counters for one reporting period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub likes: u64,
    pub comments: u64,
    pub posts: u64,
    /// Not available from the source data; zero unless the caller supplies it.
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub impressions: u64,
}

impl PeriodTotals {
    /// Sum a period's posts into totals. Shares and impressions stay zero
    /// when the package doesn't carry them.
    pub fn from_posts(posts: &[MediaPost]) -> Self {
        Self {
            likes: posts.iter().map(|p| p.like_count).sum(),
            comments: posts.iter().map(|p| p.comment_count).sum(),
            posts: posts.len() as u64,
            shares: 0,
            impressions: 0,
        }
    }
}

/// Absolute and percentage change for one metric.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MetricDelta {
    pub absolute: i64,
    pub percent: f64,
}

impl MetricDelta {
    fn between(current: u64, previous: u64) -> Self {
        let absolute = current as i64 - previous as i64;
        let percent = if previous == 0 {
            0.0
        } else {
            absolute as f64 / previous as f64 * 100.0
        };
        Self { absolute, percent }
    }
}

/// Per-metric deltas between two periods.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeeklyDeltas {
    pub likes: MetricDelta,
    pub comments: MetricDelta,
    pub posts: MetricDelta,
    pub shares: MetricDelta,
    pub impressions: MetricDelta,
}

/// The complete weekly performance comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPerformance {
    pub current: PeriodTotals,
    pub previous: Option<PeriodTotals>,
    pub deltas: WeeklyDeltas,
    /// Best post of the current period, by combined engagement.
    pub top_post_id: Option<String>,
    pub tip: String,
}

/// Compare the current period's posts against optional previous-period
/// totals.
pub fn compare_periods(
    current_posts: &[MediaPost],
    previous: Option<PeriodTotals>,
    selector: &dyn TipSelector,
    now: DateTime<Utc>,
) -> WeeklyPerformance {
    let current = PeriodTotals::from_posts(current_posts);
    let base = previous.unwrap_or_default();

    let deltas = WeeklyDeltas {
        likes: MetricDelta::between(current.likes, base.likes),
        comments: MetricDelta::between(current.comments, base.comments),
        posts: MetricDelta::between(current.posts, base.posts),
        shares: MetricDelta::between(current.shares, base.shares),
        impressions: MetricDelta::between(current.impressions, base.impressions),
    };

    WeeklyPerformance {
        current,
        previous,
        deltas,
        top_post_id: engagement::best_post(current_posts).map(|p| p.id.clone()),
        tip: selector
            .select(WEEKLY_TIPS, now)
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::tips::Fixed;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn post(id: &str, likes: u64, comments: u64) -> MediaPost {
        MediaPost {
            id: id.to_string(),
            like_count: likes,
            comment_count: comments,
            ..Default::default()
        }
    }

    #[test]
    fn zero_previous_yields_zero_percent() {
        let posts = vec![post("a", 100, 10)];
        let perf = compare_periods(&posts, Some(PeriodTotals::default()), &Fixed(0), now());
        assert_eq!(perf.deltas.likes.absolute, 100);
        assert_eq!(perf.deltas.likes.percent, 0.0);
        assert!(!perf.deltas.likes.percent.is_nan());
    }

    #[test]
    fn percent_change_computed_against_previous() {
        let posts = vec![post("a", 150, 0)];
        let previous = PeriodTotals {
            likes: 100,
            ..Default::default()
        };
        let perf = compare_periods(&posts, Some(previous), &Fixed(0), now());
        assert_eq!(perf.deltas.likes.absolute, 50);
        assert!((perf.deltas.likes.percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn decline_produces_negative_delta() {
        let posts = vec![post("a", 50, 0)];
        let previous = PeriodTotals {
            likes: 100,
            ..Default::default()
        };
        let perf = compare_periods(&posts, Some(previous), &Fixed(0), now());
        assert_eq!(perf.deltas.likes.absolute, -50);
        assert!((perf.deltas.likes.percent + 50.0).abs() < 1e-9);
    }

    #[test]
    fn top_post_identified() {
        let posts = vec![post("small", 10, 0), post("big", 500, 20)];
        let perf = compare_periods(&posts, None, &Fixed(0), now());
        assert_eq!(perf.top_post_id.as_deref(), Some("big"));
    }

    #[test]
    fn empty_period_has_no_top_post() {
        let perf = compare_periods(&[], None, &Fixed(0), now());
        assert!(perf.top_post_id.is_none());
        assert_eq!(perf.current.posts, 0);
    }

    #[test]
    fn tip_comes_from_selector() {
        let perf = compare_periods(&[], None, &Fixed(2), now());
        assert_eq!(perf.tip, WEEKLY_TIPS[2]);
    }
}
