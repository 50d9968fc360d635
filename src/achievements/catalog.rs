// The achievement catalog — every badge the product can award.
//
// This list is the canonical source of truth. Ids are stable snake_case
// strings; renaming one orphans previously stored unlock state. Ladders
// are ordered low threshold first, and every tier in a ladder is evaluated
// independently so the UI can render the full ladder with progress bars.

use serde::{Deserialize, Serialize};

/// Achievement grouping, mirrored in the dashboard's filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Growth,
    Engagement,
    Content,
    Consistency,
    Milestone,
}

impl AchievementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Growth => "growth",
            AchievementCategory::Engagement => "engagement",
            AchievementCategory::Content => "content",
            AchievementCategory::Consistency => "consistency",
            AchievementCategory::Milestone => "milestone",
        }
    }
}

/// Difficulty tier. The derived ordering (bronze < silver < gold < platinum)
/// is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Bronze => "bronze",
            Difficulty::Silver => "silver",
            Difficulty::Gold => "gold",
            Difficulty::Platinum => "platinum",
        }
    }

    /// Fixed scoring weight per tier.
    pub fn score_weight(&self) -> u32 {
        match self {
            Difficulty::Bronze => 10,
            Difficulty::Silver => 25,
            Difficulty::Gold => 50,
            Difficulty::Platinum => 100,
        }
    }
}

/// A static achievement definition. Instances are built from these by the
/// evaluation pass.
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: AchievementCategory,
    pub difficulty: Difficulty,
    /// Template copied onto the instance only when unlocked.
    pub share_text: &'static str,
}

/// Follower milestones. All seven are evaluated on every call; locked ones
/// carry progress so the dashboard shows the whole ladder.
pub const FOLLOWER_MILESTONES: &[(u64, AchievementDef)] = &[
    (
        100,
        AchievementDef {
            id: "followers_100",
            title: "First Hundred",
            description: "Reached 100 followers.",
            icon: "🌱",
            category: AchievementCategory::Milestone,
            difficulty: Difficulty::Bronze,
            share_text: "My first 100 followers on Instagram! 🌱",
        },
    ),
    (
        500,
        AchievementDef {
            id: "followers_500",
            title: "Growing Circle",
            description: "Reached 500 followers.",
            icon: "🌿",
            category: AchievementCategory::Milestone,
            difficulty: Difficulty::Bronze,
            share_text: "500 people follow my journey now! 🌿",
        },
    ),
    (
        1_000,
        AchievementDef {
            id: "followers_1k",
            title: "One Thousand Strong",
            description: "Reached 1,000 followers.",
            icon: "⭐",
            category: AchievementCategory::Milestone,
            difficulty: Difficulty::Silver,
            share_text: "Just crossed 1K followers on Instagram! ⭐",
        },
    ),
    (
        5_000,
        AchievementDef {
            id: "followers_5k",
            title: "Rising Star",
            description: "Reached 5,000 followers.",
            icon: "🌟",
            category: AchievementCategory::Milestone,
            difficulty: Difficulty::Silver,
            share_text: "5K followers and counting! 🌟",
        },
    ),
    (
        10_000,
        AchievementDef {
            id: "followers_10k",
            title: "Ten K Club",
            description: "Reached 10,000 followers.",
            icon: "💫",
            category: AchievementCategory::Milestone,
            difficulty: Difficulty::Gold,
            share_text: "Welcome to the 10K club! 💫",
        },
    ),
    (
        50_000,
        AchievementDef {
            id: "followers_50k",
            title: "Crowd Magnet",
            description: "Reached 50,000 followers.",
            icon: "🚀",
            category: AchievementCategory::Milestone,
            difficulty: Difficulty::Gold,
            share_text: "50K followers — thank you all! 🚀",
        },
    ),
    (
        100_000,
        AchievementDef {
            id: "followers_100k",
            title: "Six Figures",
            description: "Reached 100,000 followers.",
            icon: "👑",
            category: AchievementCategory::Milestone,
            difficulty: Difficulty::Platinum,
            share_text: "100K followers on Instagram! 👑",
        },
    ),
];

/// Engagement-rate tiers, in percent, against the profile's stated rate.
pub const ENGAGEMENT_TIERS: &[(f64, AchievementDef)] = &[
    (
        2.0,
        AchievementDef {
            id: "engagement_2",
            title: "Warming Up",
            description: "Engagement rate above 2%.",
            icon: "❤️",
            category: AchievementCategory::Engagement,
            difficulty: Difficulty::Bronze,
            share_text: "My audience is waking up — 2%+ engagement! ❤️",
        },
    ),
    (
        4.0,
        AchievementDef {
            id: "engagement_4",
            title: "Crowd Pleaser",
            description: "Engagement rate above 4%.",
            icon: "🔥",
            category: AchievementCategory::Engagement,
            difficulty: Difficulty::Silver,
            share_text: "4%+ engagement rate — the algorithm approves! 🔥",
        },
    ),
    (
        6.0,
        AchievementDef {
            id: "engagement_6",
            title: "Engagement Magnet",
            description: "Engagement rate above 6%.",
            icon: "⚡",
            category: AchievementCategory::Engagement,
            difficulty: Difficulty::Gold,
            share_text: "6%+ engagement — my community shows up! ⚡",
        },
    ),
    (
        10.0,
        AchievementDef {
            id: "engagement_10",
            title: "Superfan Factory",
            description: "Engagement rate above 10%.",
            icon: "💎",
            category: AchievementCategory::Engagement,
            difficulty: Difficulty::Platinum,
            share_text: "Double-digit engagement rate! 💎",
        },
    ),
];

/// Single-post viral tiers against the best post's combined engagement.
pub const VIRAL_POST_TIERS: &[(u64, AchievementDef)] = &[
    (
        100,
        AchievementDef {
            id: "viral_100",
            title: "Small Buzz",
            description: "A post earned 100 combined likes and comments.",
            icon: "📣",
            category: AchievementCategory::Engagement,
            difficulty: Difficulty::Bronze,
            share_text: "One of my posts just passed 100 reactions! 📣",
        },
    ),
    (
        500,
        AchievementDef {
            id: "viral_500",
            title: "Talk of the Town",
            description: "A post earned 500 combined likes and comments.",
            icon: "📢",
            category: AchievementCategory::Engagement,
            difficulty: Difficulty::Silver,
            share_text: "500 reactions on a single post! 📢",
        },
    ),
    (
        1_000,
        AchievementDef {
            id: "viral_1k",
            title: "Viral Spark",
            description: "A post earned 1,000 combined likes and comments.",
            icon: "🌋",
            category: AchievementCategory::Engagement,
            difficulty: Difficulty::Gold,
            share_text: "A post of mine went past 1K reactions! 🌋",
        },
    ),
    (
        5_000,
        AchievementDef {
            id: "viral_5k",
            title: "Internet Famous",
            description: "A post earned 5,000 combined likes and comments.",
            icon: "🏆",
            category: AchievementCategory::Engagement,
            difficulty: Difficulty::Platinum,
            share_text: "5K reactions on one post — it went viral! 🏆",
        },
    ),
];

/// Content-volume tiers against total post count.
pub const CONTENT_VOLUME_TIERS: &[(u64, AchievementDef)] = &[
    (
        10,
        AchievementDef {
            id: "posts_10",
            title: "Getting Started",
            description: "Published 10 posts.",
            icon: "📷",
            category: AchievementCategory::Content,
            difficulty: Difficulty::Bronze,
            share_text: "10 posts in — just getting started! 📷",
        },
    ),
    (
        50,
        AchievementDef {
            id: "posts_50",
            title: "Content Machine",
            description: "Published 50 posts.",
            icon: "🎬",
            category: AchievementCategory::Content,
            difficulty: Difficulty::Silver,
            share_text: "50 posts published! 🎬",
        },
    ),
    (
        100,
        AchievementDef {
            id: "posts_100",
            title: "Century of Posts",
            description: "Published 100 posts.",
            icon: "🗂️",
            category: AchievementCategory::Content,
            difficulty: Difficulty::Gold,
            share_text: "100 posts and still going! 🗂️",
        },
    ),
    (
        500,
        AchievementDef {
            id: "posts_500",
            title: "Archive Builder",
            description: "Published 500 posts.",
            icon: "🏛️",
            category: AchievementCategory::Content,
            difficulty: Difficulty::Platinum,
            share_text: "500 posts — a real body of work! 🏛️",
        },
    ),
];

/// Unlocked when the account uses at least two distinct media types.
pub const DIVERSITY: AchievementDef = AchievementDef {
    id: "format_explorer",
    title: "Format Explorer",
    description: "Published posts in at least two different formats.",
    icon: "🎨",
    category: AchievementCategory::Content,
    difficulty: Difficulty::Silver,
    share_text: "Mixing up my content formats! 🎨",
};

/// Follower-growth tiers, in percent, between the oldest and newest
/// snapshots. Only emitted when comparative history exists.
pub const GROWTH_TIERS: &[(f64, AchievementDef)] = &[
    (
        5.0,
        AchievementDef {
            id: "growth_5",
            title: "On the Move",
            description: "Grew followers by 5%.",
            icon: "📈",
            category: AchievementCategory::Growth,
            difficulty: Difficulty::Bronze,
            share_text: "Up 5% and moving! 📈",
        },
    ),
    (
        10.0,
        AchievementDef {
            id: "growth_10",
            title: "Momentum",
            description: "Grew followers by 10%.",
            icon: "🚀",
            category: AchievementCategory::Growth,
            difficulty: Difficulty::Silver,
            share_text: "10% follower growth! 🚀",
        },
    ),
    (
        25.0,
        AchievementDef {
            id: "growth_25",
            title: "Breakout",
            description: "Grew followers by 25%.",
            icon: "🌊",
            category: AchievementCategory::Growth,
            difficulty: Difficulty::Gold,
            share_text: "25% growth — breaking out! 🌊",
        },
    ),
    (
        50.0,
        AchievementDef {
            id: "growth_50",
            title: "Hypergrowth",
            description: "Grew followers by 50%.",
            icon: "🌠",
            category: AchievementCategory::Growth,
            difficulty: Difficulty::Platinum,
            share_text: "50% follower growth! 🌠",
        },
    ),
];

/// Consistency tiers: posts within the trailing 30 days. Only evaluated for
/// accounts with at least 7 posts total.
pub const CONSISTENCY_TIERS: &[(u64, AchievementDef)] = &[
    (
        7,
        AchievementDef {
            id: "consistency_7",
            title: "Weekly Rhythm",
            description: "Posted 7 times in the last 30 days.",
            icon: "📅",
            category: AchievementCategory::Consistency,
            difficulty: Difficulty::Bronze,
            share_text: "Found my posting rhythm! 📅",
        },
    ),
    (
        15,
        AchievementDef {
            id: "consistency_15",
            title: "Steady Creator",
            description: "Posted 15 times in the last 30 days.",
            icon: "⏰",
            category: AchievementCategory::Consistency,
            difficulty: Difficulty::Silver,
            share_text: "15 posts this month — steady as it goes! ⏰",
        },
    ),
    (
        30,
        AchievementDef {
            id: "consistency_30",
            title: "Daily Devotion",
            description: "Posted 30 times in the last 30 days.",
            icon: "🔁",
            category: AchievementCategory::Consistency,
            difficulty: Difficulty::Gold,
            share_text: "A post a day for a whole month! 🔁",
        },
    ),
];

/// The follower thresholds, shared with milestone-proximity notifications.
pub fn follower_thresholds() -> impl Iterator<Item = u64> {
    FOLLOWER_MILESTONES.iter().map(|(t, _)| *t)
}
