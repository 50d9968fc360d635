// Unit tests for insight and notification generation.
//
// Covers the milestone-proximity window from both sides, the empty-media
// fallback win, and the engagement message bands.

use aperture::analysis::patterns::calculate_posting_patterns;
use aperture::insights::{
    generate_notifications, generate_smart_insights, generate_weekly_wins,
};
use aperture::model::{MediaPost, Profile};

fn profile(followers: u64, rate: f64) -> Profile {
    Profile {
        followers_count: followers,
        engagement_rate: rate,
        ..Default::default()
    }
}

fn notification_kinds(profile: &Profile, posts: &[MediaPost]) -> Vec<String> {
    let patterns = calculate_posting_patterns(posts);
    generate_notifications(profile, posts, &patterns)
        .into_iter()
        .map(|n| n.kind)
        .collect()
}

// ============================================================
// Milestone proximity — the 5% window, both sides
// ============================================================

#[test]
fn followers_950_fires_approaching() {
    let kinds = notification_kinds(&profile(950, 5.0), &[]);
    assert!(kinds.contains(&"milestone_approaching".to_string()));
    assert!(!kinds.contains(&"milestone_reached".to_string()));
}

#[test]
fn followers_1000_fires_just_reached() {
    let kinds = notification_kinds(&profile(1_000, 5.0), &[]);
    assert!(kinds.contains(&"milestone_reached".to_string()));
    assert!(!kinds.contains(&"milestone_approaching".to_string()));
}

#[test]
fn followers_1050_fires_neither() {
    // 1050 is exactly 5% above 1000 — outside the half-open upper window
    let kinds = notification_kinds(&profile(1_050, 5.0), &[]);
    assert!(!kinds.contains(&"milestone_reached".to_string()));
    assert!(!kinds.contains(&"milestone_approaching".to_string()));
}

#[test]
fn proximity_never_fires_both_for_one_threshold() {
    for followers in 90..120 {
        let kinds = notification_kinds(&profile(followers, 5.0), &[]);
        let proximity = kinds
            .iter()
            .filter(|k| k.starts_with("milestone_"))
            .count();
        assert!(
            proximity <= 1,
            "{followers} followers fired {proximity} proximity notifications"
        );
    }
}

// ============================================================
// Weekly wins — fallback path
// ============================================================

#[test]
fn empty_media_returns_single_growth_milestone_win() {
    let wins = generate_weekly_wins(&profile(150, 0.0), &[]);
    assert_eq!(wins.len(), 1);
    assert_eq!(wins[0].kind, "growth_milestone");
    assert_eq!(wins[0].title, "Nice Following!");
    assert!(wins[0].message.contains("150"));
}

#[test]
fn media_present_yields_best_post_win() {
    let posts = vec![
        MediaPost {
            id: "a".to_string(),
            like_count: 10,
            ..Default::default()
        },
        MediaPost {
            id: "b".to_string(),
            like_count: 90,
            comment_count: 12,
            ..Default::default()
        },
    ];
    let wins = generate_weekly_wins(&profile(1_000, 0.0), &posts);
    let best = wins.iter().find(|w| w.kind == "best_post").unwrap();
    assert!(best.message.contains("90"));
    assert!(best.message.contains("12"));
}

// ============================================================
// Smart insights
// ============================================================

#[test]
fn posting_window_insight_always_present() {
    for posts in [
        vec![],
        vec![MediaPost {
            timestamp: Some("2024-06-01T10:00:00+00:00".to_string()),
            ..Default::default()
        }],
    ] {
        let patterns = calculate_posting_patterns(&posts);
        let insights = generate_smart_insights(&profile(100, 0.0), &posts, &patterns);
        assert!(
            insights.iter().any(|i| i.kind == "posting_window"),
            "posting_window missing for {} posts",
            posts.len()
        );
    }
}

#[test]
fn engagement_health_has_exactly_one_band() {
    for rate in [0.5, 3.0, 9.0] {
        let patterns = calculate_posting_patterns(&[]);
        let posts = vec![MediaPost::default()];
        let insights = generate_smart_insights(&profile(100, rate), &posts, &patterns);
        let health: Vec<_> = insights
            .iter()
            .filter(|i| i.kind == "engagement_health")
            .collect();
        assert_eq!(health.len(), 1);
    }
}

// ============================================================
// Notifications — remaining kinds
// ============================================================

#[test]
fn posting_time_notification_needs_timing_data() {
    // No timestamps -> no hour histogram -> no posting-time nudge
    let kinds = notification_kinds(&profile(10_000, 5.0), &[MediaPost::default()]);
    assert!(!kinds.contains(&"posting_time".to_string()));

    let posts = vec![
        MediaPost {
            timestamp: Some("2024-06-01T18:00:00+00:00".to_string()),
            ..Default::default()
        },
        MediaPost {
            timestamp: Some("2024-06-03T18:30:00+00:00".to_string()),
            ..Default::default()
        },
    ];
    let kinds = notification_kinds(&profile(10_000, 5.0), &posts);
    assert!(kinds.contains(&"posting_time".to_string()));
}

#[test]
fn low_engagement_reminder_below_three_percent() {
    let posts = vec![MediaPost {
        like_count: 1,
        ..Default::default()
    }];
    let kinds = notification_kinds(&profile(10_000, 1.0), &posts);
    assert!(kinds.contains(&"low_engagement".to_string()));

    let kinds = notification_kinds(&profile(10_000, 4.0), &posts);
    assert!(!kinds.contains(&"low_engagement".to_string()));
}
