// Smart insights — observations about what is working and why.
//
// The posting-window insight is always present; the content-type and
// engagement-health insights appear when their conditions hold.

use serde::{Deserialize, Serialize};

use crate::analysis::engagement;
use crate::analysis::patterns::PostingPatterns;
use crate::model::{MediaPost, MediaType, Profile};

/// Video must outperform image by this factor before we call it out.
const VIDEO_OVER_IMAGE_MARGIN: f64 = 1.2;

/// One derived observation with a confidence score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartInsight {
    /// Stable kind tag: "posting_window", "content_type", "engagement_health".
    pub kind: String,
    pub title: String,
    pub message: String,
    pub confidence: f64,
}

/// Generate smart insights from the analysis results.
pub fn generate_smart_insights(
    profile: &Profile,
    posts: &[MediaPost],
    patterns: &PostingPatterns,
) -> Vec<SmartInsight> {
    let mut insights = Vec::new();

    // Best posting window — always included, with a generic message when
    // there isn't enough timing data to name one
    insights.push(match (patterns.top_hours.first(), patterns.top_days.first()) {
        (Some(hour), Some(day)) => SmartInsight {
            kind: "posting_window".to_string(),
            title: "Your Best Posting Window".to_string(),
            message: format!(
                "Your audience engages most around {hour}:00 on {day}s. \
                 Schedule your strongest content there."
            ),
            confidence: 0.8,
        },
        _ => SmartInsight {
            kind: "posting_window".to_string(),
            title: "Your Best Posting Window".to_string(),
            message: "Not enough timing data yet — post consistently for a few weeks \
                      and your window will emerge."
                .to_string(),
            confidence: 0.5,
        },
    });

    // Content-type insight: only when both formats exist and video clearly wins
    let has_video = posts.iter().any(|p| p.media_type == MediaType::Video);
    let has_image = posts.iter().any(|p| p.media_type == MediaType::Image);
    if has_video && has_image {
        let video_avg = engagement::average_engagement_by_type(posts, MediaType::Video);
        let image_avg = engagement::average_engagement_by_type(posts, MediaType::Image);
        if video_avg > image_avg * VIDEO_OVER_IMAGE_MARGIN {
            insights.push(SmartInsight {
                kind: "content_type".to_string(),
                title: "Video Is Winning".to_string(),
                message: format!(
                    "Your videos average {video_avg:.0} engagement vs {image_avg:.0} for images. \
                     Shift more of your feed to video."
                ),
                confidence: 0.85,
            });
        }
    }

    // Engagement health, three bands
    let rate = engagement::effective_engagement_rate(profile, posts);
    let (message, confidence) = if rate > 6.0 {
        (
            format!(
                "Your {rate:.1}% engagement rate is exceptional — brands look for \
                 exactly this kind of audience connection."
            ),
            0.9,
        )
    } else if rate >= 2.0 {
        (
            format!(
                "Your {rate:.1}% engagement rate is solid. Consistent posting and \
                 early replies will push it higher."
            ),
            0.85,
        )
    } else {
        (
            format!(
                "Your {rate:.1}% engagement rate has room to grow. Try questions in \
                 captions and reply to every comment."
            ),
            0.8,
        )
    };
    insights.push(SmartInsight {
        kind: "engagement_health".to_string(),
        title: "Engagement Health".to_string(),
        message,
        confidence,
    });

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::patterns::calculate_posting_patterns;

    fn typed_post(media_type: MediaType, likes: u64) -> MediaPost {
        MediaPost {
            media_type,
            like_count: likes,
            ..Default::default()
        }
    }

    #[test]
    fn posting_window_always_present() {
        let profile = Profile::default();
        let patterns = calculate_posting_patterns(&[]);
        let insights = generate_smart_insights(&profile, &[], &patterns);
        assert!(insights.iter().any(|i| i.kind == "posting_window"));
    }

    #[test]
    fn video_insight_requires_margin() {
        let profile = Profile {
            followers_count: 1_000,
            ..Default::default()
        };
        let patterns = calculate_posting_patterns(&[]);

        // Video at 110 vs image at 100: inside the 20% margin, no insight
        let close = vec![
            typed_post(MediaType::Video, 110),
            typed_post(MediaType::Image, 100),
        ];
        let insights = generate_smart_insights(&profile, &close, &patterns);
        assert!(insights.iter().all(|i| i.kind != "content_type"));

        // Video at 300 vs image at 100: clearly outperforms
        let wide = vec![
            typed_post(MediaType::Video, 300),
            typed_post(MediaType::Image, 100),
        ];
        let insights = generate_smart_insights(&profile, &wide, &patterns);
        assert!(insights.iter().any(|i| i.kind == "content_type"));
    }

    #[test]
    fn video_insight_needs_both_formats() {
        let profile = Profile::default();
        let patterns = calculate_posting_patterns(&[]);
        let only_video = vec![typed_post(MediaType::Video, 500)];
        let insights = generate_smart_insights(&profile, &only_video, &patterns);
        assert!(insights.iter().all(|i| i.kind != "content_type"));
    }

    #[test]
    fn engagement_health_bands() {
        let patterns = calculate_posting_patterns(&[]);
        let posts = vec![MediaPost::default()];

        for (rate, fragment) in [
            (8.0, "exceptional"),
            (4.0, "solid"),
            (1.0, "room to grow"),
        ] {
            let profile = Profile {
                followers_count: 100,
                engagement_rate: rate,
                ..Default::default()
            };
            let insights = generate_smart_insights(&profile, &posts, &patterns);
            let health = insights
                .iter()
                .find(|i| i.kind == "engagement_health")
                .unwrap();
            assert!(
                health.message.contains(fragment),
                "rate {rate} should produce '{fragment}', got: {}",
                health.message
            );
        }
    }
}
