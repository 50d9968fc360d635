// RawDataPackage — the pre-fetched bundle of profile + media the pipeline
// takes as input, plus an optional history of prior snapshots for growth
// comparisons.

use serde::{Deserialize, Serialize};

use super::media::MediaPost;
use super::profile::Profile;

/// A prior follower-count observation, used for growth achievements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub followers_count: u64,
    /// When the snapshot was taken (RFC 3339).
    #[serde(default)]
    pub taken_at: String,
}

/// The complete input to the pipeline. Everything the core derives comes
/// from this one value; it performs no I/O of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDataPackage {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub media: Vec<MediaPost>,
    /// Prior snapshots, oldest first. Empty when the caller has no history.
    #[serde(default)]
    pub history: Vec<ProfileSnapshot>,
}
