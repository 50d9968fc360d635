// Posting pattern analysis — frequency classification and hour/day histograms.
//
// Works only from posts that carry a parseable timestamp; posts without one
// are excluded rather than treated as an error. Posts are sorted newest-first
// internally because API return order is not guaranteed chronological.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::MediaPost;

/// How often the account posts, derived from average inter-post gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingFrequency {
    Daily,
    EveryFewDays,
    Weekly,
    Irregular,
}

impl PostingFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostingFrequency::Daily => "daily",
            PostingFrequency::EveryFewDays => "every_few_days",
            PostingFrequency::Weekly => "weekly",
            PostingFrequency::Irregular => "irregular",
        }
    }
}

/// The derived posting rhythm of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingPatterns {
    pub frequency: PostingFrequency,
    /// Up to 3 most frequent posting hours (0-23), most frequent first.
    pub top_hours: Vec<u32>,
    /// Up to 3 most frequent posting days, most frequent first.
    pub top_days: Vec<String>,
}

impl PostingPatterns {
    /// The empty result for accounts with fewer than two timestamped posts.
    pub fn irregular() -> Self {
        Self {
            frequency: PostingFrequency::Irregular,
            top_hours: vec![],
            top_days: vec![],
        }
    }
}

/// Analyze posting patterns from a set of posts.
pub fn calculate_posting_patterns(posts: &[MediaPost]) -> PostingPatterns {
    let mut timestamps: Vec<DateTime<Utc>> =
        posts.iter().filter_map(|p| p.published_at()).collect();

    if timestamps.len() < 2 {
        return PostingPatterns::irregular();
    }

    // Newest first — required for correct delta computation
    timestamps.sort_by(|a, b| b.cmp(a));

    let deltas: Vec<f64> = timestamps
        .windows(2)
        .map(|w| (w[0] - w[1]).num_seconds() as f64 / 86_400.0)
        .collect();
    let avg_gap_days = deltas.iter().sum::<f64>() / deltas.len() as f64;

    let frequency = match avg_gap_days {
        d if d <= 1.0 => PostingFrequency::Daily,
        d if d <= 3.0 => PostingFrequency::EveryFewDays,
        d if d <= 7.0 => PostingFrequency::Weekly,
        _ => PostingFrequency::Irregular,
    };

    let top_hours = top_keys(timestamps.iter().map(|t| t.hour()), 3);
    let top_days = top_keys(timestamps.iter().map(|t| t.weekday()), 3)
        .into_iter()
        .map(|d| day_name(d).to_string())
        .collect();

    PostingPatterns {
        frequency,
        top_hours,
        top_days,
    }
}

/// Return the `n` most frequent keys, most frequent first. Ties keep
/// first-encountered order (the histogram preserves insertion order and the
/// sort is stable).
fn top_keys<K: PartialEq + Copy>(keys: impl Iterator<Item = K>, n: usize) -> Vec<K> {
    let mut histogram: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match histogram.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => histogram.push((key, 1)),
        }
    }
    histogram.sort_by(|a, b| b.1.cmp(&a.1));
    histogram.into_iter().take(n).map(|(k, _)| k).collect()
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
