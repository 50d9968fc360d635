// Tip selection — a swap-ready seam for choosing the weekly smart tip.
//
// The selector is injected rather than hardcoded so tip choice stays
// deterministic in the core: the default rotates through the fixed list by
// weekday. Callers that want true randomization can implement the trait at
// the presentation layer.

use chrono::{DateTime, Datelike, Utc};

/// The fixed tip list the weekly report draws from.
pub const WEEKLY_TIPS: &[&str] = &[
    "Reply to comments within the first hour — early conversation boosts reach.",
    "Carousels earn more saves. Turn your best tips into a swipe-through.",
    "Post when your audience is online, not when it's convenient.",
    "A question at the end of a caption doubles your comment odds.",
    "Faces in photos consistently outperform product-only shots.",
    "Batch-produce content on one day, then schedule the week.",
    "Check which posts brought new followers and make more of those.",
];

/// Strategy for picking one tip from a list.
pub trait TipSelector {
    /// Pick a tip. None only for an empty list.
    fn select<'a>(&self, tips: &'a [&'a str], now: DateTime<Utc>) -> Option<&'a str>;
}

/// Default selector: rotate through the list by day of week. Same day, same
/// tip — deterministic and testable.
pub struct DayRotation;

impl TipSelector for DayRotation {
    fn select<'a>(&self, tips: &'a [&'a str], now: DateTime<Utc>) -> Option<&'a str> {
        if tips.is_empty() {
            return None;
        }
        let index = now.weekday().num_days_from_monday() as usize % tips.len();
        Some(tips[index])
    }
}

/// Always pick the tip at a fixed index (modulo list length). Used by tests
/// and by callers with their own schedule.
pub struct Fixed(pub usize);

impl TipSelector for Fixed {
    fn select<'a>(&self, tips: &'a [&'a str], _now: DateTime<Utc>) -> Option<&'a str> {
        if tips.is_empty() {
            return None;
        }
        Some(tips[self.0 % tips.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn day_rotation_is_deterministic() {
        let monday = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let a = DayRotation.select(WEEKLY_TIPS, monday);
        let b = DayRotation.select(WEEKLY_TIPS, monday);
        assert_eq!(a, b);
        assert_eq!(a, Some(WEEKLY_TIPS[0]));
    }

    #[test]
    fn day_rotation_varies_across_the_week() {
        let monday = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let tuesday = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
        assert_ne!(
            DayRotation.select(WEEKLY_TIPS, monday),
            DayRotation.select(WEEKLY_TIPS, tuesday)
        );
    }

    #[test]
    fn empty_list_selects_none() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(DayRotation.select(&[], now), None);
        assert_eq!(Fixed(3).select(&[], now), None);
    }

    #[test]
    fn fixed_selector_wraps() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let tips = ["a", "b", "c"];
        assert_eq!(Fixed(4).select(&tips, now), Some("b"));
    }
}
