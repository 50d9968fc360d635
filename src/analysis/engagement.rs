// Engagement math — per-post counts, account rates, stable top-N selection.
//
// Every rate guards its denominator: zero followers or zero posts yields
// 0.0, never NaN. This is a contract of the whole pipeline, not a per-caller
// special case.

use crate::model::{MediaPost, MediaType, Profile};

/// Combined engagement for a single post (likes + comments).
pub fn post_engagement(post: &MediaPost) -> u64 {
    post.engagement()
}

/// A single post's engagement as a percentage of follower count.
pub fn post_engagement_rate(post: &MediaPost, profile: &Profile) -> f64 {
    if profile.followers_count == 0 {
        return 0.0;
    }
    post.engagement() as f64 / profile.followers_count as f64 * 100.0
}

/// Account-level engagement rate: average engagement per post as a
/// percentage of follower count.
pub fn account_engagement_rate(profile: &Profile, posts: &[MediaPost]) -> f64 {
    if profile.followers_count == 0 || posts.is_empty() {
        return 0.0;
    }
    let avg = average_engagement(posts);
    avg / profile.followers_count as f64 * 100.0
}

/// The rate downstream consumers should use: the profile's stated rate when
/// the fetch layer supplied one, otherwise the rate computed from the posts.
pub fn effective_engagement_rate(profile: &Profile, posts: &[MediaPost]) -> f64 {
    if profile.engagement_rate > 0.0 {
        profile.engagement_rate
    } else {
        account_engagement_rate(profile, posts)
    }
}

/// Mean engagement per post. Zero for an empty list.
pub fn average_engagement(posts: &[MediaPost]) -> f64 {
    if posts.is_empty() {
        return 0.0;
    }
    posts.iter().map(|p| p.engagement() as f64).sum::<f64>() / posts.len() as f64
}

/// Mean engagement across posts of one media type. Zero when none exist.
pub fn average_engagement_by_type(posts: &[MediaPost], media_type: MediaType) -> f64 {
    let matching: Vec<&MediaPost> = posts.iter().filter(|p| p.media_type == media_type).collect();
    if matching.is_empty() {
        return 0.0;
    }
    matching.iter().map(|p| p.engagement() as f64).sum::<f64>() / matching.len() as f64
}

/// The top `n` posts by engagement, descending. The sort is stable: posts
/// with equal engagement keep their original relative order.
pub fn top_posts<'a>(posts: &'a [MediaPost], n: usize) -> Vec<&'a MediaPost> {
    let mut ranked: Vec<&MediaPost> = posts.iter().collect();
    ranked.sort_by(|a, b| b.engagement().cmp(&a.engagement()));
    ranked.truncate(n);
    ranked
}

/// The single best-performing post, or None for an empty list.
pub fn best_post(posts: &[MediaPost]) -> Option<&MediaPost> {
    top_posts(posts, 1).into_iter().next()
}
