// Insight generation — human-readable weekly wins, smart insights, and
// actionable notifications derived from the analysis passes.

pub mod notifications;
pub mod smart;
pub mod tips;
pub mod wins;

pub use notifications::{generate_notifications, SmartNotification};
pub use smart::{generate_smart_insights, SmartInsight};
pub use tips::{DayRotation, Fixed, TipSelector, WEEKLY_TIPS};
pub use wins::{generate_weekly_wins, WeeklyWin};
