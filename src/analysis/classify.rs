// Content classification — niche detection and per-post content buckets.
//
// Niche detection scans all captions against an ordered keyword rule list
// and picks the best-scoring label. The rules are plain data so callers can
// substitute their own list (localization, testing) without touching the
// matching logic.
//
// Matching is whole-word: "fit" must score fitness for "#fit goals" but not
// for "new outfit". Substring matching over word fragments is incorrect here.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{MediaPost, MediaType};

/// One niche rule: a label plus the keywords that vote for it.
///
/// Rules are evaluated in declaration order; ties go to the earlier rule.
pub struct NicheRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

/// The built-in niche dictionary. Order matters for tie-breaking.
pub const DEFAULT_NICHE_RULES: &[NicheRule] = &[
    NicheRule {
        label: "fitness",
        keywords: &[
            "fitness", "workout", "gym", "training", "exercise", "muscle", "cardio", "yoga",
            "fit", "wellness",
        ],
    },
    NicheRule {
        label: "business",
        keywords: &[
            "business",
            "entrepreneur",
            "startup",
            "marketing",
            "sales",
            "hustle",
            "brand",
            "money",
        ],
    },
    NicheRule {
        label: "lifestyle",
        keywords: &[
            "lifestyle",
            "daily",
            "routine",
            "inspiration",
            "motivation",
            "mindset",
            "selfcare",
        ],
    },
    NicheRule {
        label: "food",
        keywords: &[
            "food", "recipe", "cooking", "foodie", "delicious", "kitchen", "baking", "meal",
        ],
    },
    NicheRule {
        label: "travel",
        keywords: &[
            "travel",
            "wanderlust",
            "adventure",
            "explore",
            "vacation",
            "trip",
            "destination",
        ],
    },
    NicheRule {
        label: "tech",
        keywords: &[
            "tech",
            "technology",
            "coding",
            "software",
            "gadget",
            "ai",
            "developer",
            "programming",
        ],
    },
    NicheRule {
        label: "fashion",
        keywords: &[
            "fashion", "style", "outfit", "ootd", "clothing", "designer", "streetwear",
        ],
    },
    NicheRule {
        label: "beauty",
        keywords: &[
            "beauty", "makeup", "skincare", "cosmetics", "glam", "haircare", "lashes",
        ],
    },
];

/// The label returned when no keyword matches anywhere.
pub const GENERAL_NICHE: &str = "general";

/// Detect the account's niche from its captions using the built-in rules.
pub fn detect_niche(posts: &[MediaPost]) -> String {
    detect_niche_with(posts, DEFAULT_NICHE_RULES)
}

/// Detect the account's niche against a caller-supplied rule list.
///
/// Concatenates all captions (case-insensitive), counts whole-word matches
/// per rule, and returns the highest-scoring label. Ties resolve to the
/// first-declared rule; zero matches everywhere returns "general".
pub fn detect_niche_with(posts: &[MediaPost], rules: &[NicheRule]) -> String {
    let corpus = posts
        .iter()
        .map(|p| p.caption_text().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if corpus.trim().is_empty() {
        return GENERAL_NICHE.to_string();
    }

    let mut best_label = GENERAL_NICHE;
    let mut best_count = 0usize;

    for rule in rules {
        let count: usize = rule
            .keywords
            .iter()
            .map(|kw| whole_word_count(&corpus, kw))
            .sum();
        // Strict > keeps the first-declared rule on ties
        if count > best_count {
            best_count = count;
            best_label = rule.label;
        }
    }

    best_label.to_string()
}

/// Count whole-word occurrences of `word` in `text`.
fn whole_word_count(text: &str, word: &str) -> usize {
    match Regex::new(&format!(r"\b{word}\b")) {
        Ok(re) => re.find_iter(text).count(),
        Err(_) => 0,
    }
}

/// The presentation bucket a post lands in. Unlike keyword categories this
/// is a partition: every post belongs to exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentBucket {
    Carousel,
    Reel,
    Video,
    Image,
}

impl ContentBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentBucket::Carousel => "carousel",
            ContentBucket::Reel => "reel",
            ContentBucket::Video => "video",
            ContentBucket::Image => "image",
        }
    }

    /// All buckets in display order.
    pub fn all() -> [ContentBucket; 4] {
        [
            ContentBucket::Carousel,
            ContentBucket::Reel,
            ContentBucket::Video,
            ContentBucket::Image,
        ]
    }
}

/// Assign a post to its content bucket.
///
/// The Graph API reports reels as VIDEO; the `#reel`/`#reels` caption
/// hashtag disambiguates them.
pub fn bucket_for(post: &MediaPost) -> ContentBucket {
    match post.media_type {
        MediaType::CarouselAlbum => ContentBucket::Carousel,
        MediaType::Video => {
            if post.caption_text().to_lowercase().contains("#reel") {
                ContentBucket::Reel
            } else {
                ContentBucket::Video
            }
        }
        MediaType::Image => ContentBucket::Image,
    }
}

/// A group of posts sharing a classification, with aggregate engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCategory {
    pub label: String,
    pub post_count: usize,
    pub total_engagement: u64,
    pub avg_engagement: f64,
    /// Up to 3 example post ids, in original order.
    pub example_ids: Vec<String>,
    pub recommendation: String,
}

/// Build the media-type categories for the buckets that actually have posts.
pub fn categorize_by_bucket(posts: &[MediaPost]) -> Vec<ContentCategory> {
    ContentBucket::all()
        .into_iter()
        .filter_map(|bucket| {
            let members: Vec<&MediaPost> =
                posts.iter().filter(|p| bucket_for(p) == bucket).collect();
            if members.is_empty() {
                return None;
            }
            Some(build_category(
                bucket.as_str(),
                &members,
                bucket_recommendation(bucket),
            ))
        })
        .collect()
}

/// Build the caption-keyword categories. Non-exclusive: a post may appear in
/// several, or in none.
pub fn categorize_by_keywords(posts: &[MediaPost], rules: &[NicheRule]) -> Vec<ContentCategory> {
    rules
        .iter()
        .filter_map(|rule| {
            let members: Vec<&MediaPost> = posts
                .iter()
                .filter(|p| {
                    let caption = p.caption_text().to_lowercase();
                    rule.keywords
                        .iter()
                        .any(|kw| whole_word_count(&caption, kw) > 0)
                })
                .collect();
            if members.is_empty() {
                return None;
            }
            let recommendation = format!(
                "Your {} posts resonate with this audience. Lean into the theme.",
                rule.label
            );
            Some(build_category(rule.label, &members, recommendation))
        })
        .collect()
}

fn build_category(
    label: &str,
    members: &[&MediaPost],
    recommendation: impl Into<String>,
) -> ContentCategory {
    let total: u64 = members.iter().map(|p| p.engagement()).sum();
    ContentCategory {
        label: label.to_string(),
        post_count: members.len(),
        total_engagement: total,
        avg_engagement: total as f64 / members.len() as f64,
        example_ids: members.iter().take(3).map(|p| p.id.clone()).collect(),
        recommendation: recommendation.into(),
    }
}

fn bucket_recommendation(bucket: ContentBucket) -> String {
    match bucket {
        ContentBucket::Carousel => {
            "Carousels reward swipe-through value. Lead with a strong hook slide.".to_string()
        }
        ContentBucket::Reel => {
            "Reels reach beyond your followers. Keep short-form video in the mix.".to_string()
        }
        ContentBucket::Video => {
            "Hook viewers in the first three seconds before the main content.".to_string()
        }
        ContentBucket::Image => {
            "Pair single images with captions that invite comments.".to_string()
        }
    }
}
