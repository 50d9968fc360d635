// Colored terminal output for reports, achievements, and insights.
//
// This module handles all terminal-specific formatting: colors, tables,
// section headers. The main.rs display paths delegate here.

use colored::Colorize;

use super::truncate_chars;
use crate::achievements::{Achievement, Difficulty, UserStats};
use crate::analysis::classify::ContentCategory;
use crate::insights::{SmartInsight, SmartNotification, WeeklyWin};
use crate::report::AccountReport;
use crate::weekly::{MetricDelta, WeeklyPerformance};

/// Display a complete account report.
pub fn display_report(report: &AccountReport) {
    println!(
        "\n{}",
        format!("=== Report for @{} ===", report.username).bold()
    );
    println!("  Niche: {}", report.niche.bold());
    println!("  Engagement rate: {:.2}%", report.engagement_rate);
    println!("  Posting cadence: {}", report.patterns.frequency.as_str());
    if let Some(hour) = report.patterns.top_hours.first() {
        println!("  Best hour: {hour}:00");
    }
    if let Some(day) = report.patterns.top_days.first() {
        println!("  Best day: {day}");
    }

    if !report.top_posts.is_empty() {
        println!("\n  {}", "Top posts".dimmed());
        for (i, post) in report.top_posts.iter().enumerate() {
            println!(
                "  {:>3}. {:<44} {:>6} likes {:>5} comments",
                i + 1,
                truncate_chars(post.caption_text(), 40),
                post.like_count,
                post.comment_count,
            );
        }
    }

    display_achievement_summary(&report.stats);
    display_insights(&report.wins, &report.insights, &report.notifications);
    display_weekly(&report.weekly);
}

/// Display the full achievement list with unlock state and progress.
pub fn display_achievements(achievements: &[Achievement], stats: &UserStats) {
    if achievements.is_empty() {
        println!("No achievements evaluated. Check the data package.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Achievements ({} unlocked) ===", stats.total_unlocked).bold()
    );
    println!();

    for achievement in achievements {
        let marker = if achievement.unlocked {
            "✓".green().bold().to_string()
        } else {
            "·".dimmed().to_string()
        };
        let progress = match (achievement.progress, achievement.max_progress) {
            (Some(p), Some(m)) => format!("{p}/{m}"),
            _ => String::new(),
        };
        println!(
            "  {} {} {:<24} {:<10} {:>12}  {}",
            marker,
            achievement.icon,
            achievement.title,
            colorize_difficulty(achievement.difficulty),
            progress,
            achievement.description.dimmed(),
        );
    }

    display_achievement_summary(stats);
}

fn display_achievement_summary(stats: &UserStats) {
    println!(
        "\n  Score: {} ({} bronze, {} silver, {} gold, {} platinum)",
        stats.score.to_string().bold(),
        stats.bronze,
        stats.silver,
        stats.gold,
        stats.platinum,
    );
    if let Some(latest) = &stats.latest {
        println!("  Latest unlock: {} {}", latest.icon, latest.title);
    }
}

/// Display wins, insights, and notifications as three short sections.
pub fn display_insights(
    wins: &[WeeklyWin],
    insights: &[SmartInsight],
    notifications: &[SmartNotification],
) {
    if !wins.is_empty() {
        println!("\n{}", "=== Weekly Wins ===".bold());
        for win in wins {
            println!("  {}  {}", win.title.bright_green(), win.message.dimmed());
        }
    }

    if !insights.is_empty() {
        println!("\n{}", "=== Smart Insights ===".bold());
        for insight in insights {
            println!("  {}", insight.title.bright_yellow());
            println!("    {}", insight.message);
        }
    }

    if !notifications.is_empty() {
        println!("\n{}", "=== Notifications ===".bold());
        for notification in notifications {
            println!(
                "  {} {}",
                notification.title.bright_blue(),
                format!("[{}]", notification.action).dimmed()
            );
            println!("    {}", notification.message);
        }
    }
}

/// Display the weekly performance comparison.
pub fn display_weekly(weekly: &WeeklyPerformance) {
    println!("\n{}", "=== Weekly Performance ===".bold());
    println!(
        "  {:<12} {:>8} {:>10} {:>9}",
        "Metric".dimmed(),
        "Now".dimmed(),
        "Change".dimmed(),
        "%".dimmed(),
    );
    let rows = [
        ("Likes", weekly.current.likes, weekly.deltas.likes),
        ("Comments", weekly.current.comments, weekly.deltas.comments),
        ("Posts", weekly.current.posts, weekly.deltas.posts),
        ("Shares", weekly.current.shares, weekly.deltas.shares),
        (
            "Impressions",
            weekly.current.impressions,
            weekly.deltas.impressions,
        ),
    ];
    for (label, current, delta) in rows {
        println!(
            "  {:<12} {:>8} {:>10} {:>8.1}%",
            label,
            current,
            format_delta(delta),
            delta.percent,
        );
    }
    if let Some(id) = &weekly.top_post_id {
        println!("  Top post: {id}");
    }
    if !weekly.tip.is_empty() {
        println!("\n  {} {}", "Tip:".bold(), weekly.tip);
    }
}

/// Display niche and content categories.
pub fn display_niche(niche: &str, buckets: &[ContentCategory], topics: &[ContentCategory]) {
    println!("\n{}", format!("=== Niche: {niche} ===").bold());

    if !buckets.is_empty() {
        println!("\n  {}", "By format".dimmed());
        for category in buckets {
            println!(
                "  {:<10} {:>4} posts {:>8.0} avg engagement",
                category.label, category.post_count, category.avg_engagement,
            );
            println!("    {}", category.recommendation.dimmed());
        }
    }

    if !topics.is_empty() {
        println!("\n  {}", "By topic".dimmed());
        for category in topics {
            println!(
                "  {:<10} {:>4} posts {:>8.0} avg engagement",
                category.label, category.post_count, category.avg_engagement,
            );
        }
    }
}

fn format_delta(delta: MetricDelta) -> String {
    if delta.absolute >= 0 {
        format!("+{}", delta.absolute)
    } else {
        delta.absolute.to_string()
    }
}

fn colorize_difficulty(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Bronze => difficulty.as_str().yellow().to_string(),
        Difficulty::Silver => difficulty.as_str().white().to_string(),
        Difficulty::Gold => difficulty.as_str().bright_yellow().to_string(),
        Difficulty::Platinum => difficulty.as_str().bright_cyan().to_string(),
    }
}
