// Profile — an immutable account snapshot at fetch time.
//
// Supplied by the caller, never mutated by the pipeline. Counts default to
// zero so a partially-populated export still analyzes cleanly.

use serde::{Deserialize, Serialize};

/// Instagram account classification as reported by the Graph API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Personal,
    Business,
    Creator,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Personal => "Personal",
            AccountType::Business => "Business",
            AccountType::Creator => "Creator",
        }
    }
}

/// An account snapshot: identity plus the counts the pipeline derives from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub follows_count: u64,
    #[serde(default)]
    pub media_count: u64,
    /// Engagement rate as a percentage (e.g. 3.5 = 3.5%), as reported by
    /// the fetch layer. Zero when the export doesn't carry one.
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub account_type: AccountType,
}
