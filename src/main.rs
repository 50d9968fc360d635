use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};

use aperture::achievements;
use aperture::analysis::{classify, patterns};
use aperture::config::Config;
use aperture::insights;
use aperture::model::RawDataPackage;
use aperture::output::terminal;
use aperture::report::{build_report, ReportOptions};
use aperture::weekly::{compare_periods, PeriodTotals};

/// Aperture: creator analytics for exported Instagram data.
///
/// Takes a pre-fetched JSON data package (profile + media, optionally
/// follower history) and derives reports, achievements, and insights.
/// Fetching and storage stay with the surrounding application.
#[derive(Parser)]
#[command(name = "aperture", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full analytics report
    Report {
        /// Path to the raw data package (JSON)
        package: PathBuf,

        /// Emit the report as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the achievement catalog
    Achievements {
        /// Path to the raw data package (JSON)
        package: PathBuf,

        /// Previously stored achievement state, for unlock timestamps
        #[arg(long)]
        previous: Option<PathBuf>,

        /// Emit achievements as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Generate weekly wins, smart insights, and notifications
    Insights {
        /// Path to the raw data package (JSON)
        package: PathBuf,

        /// Emit insights as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Compare this period's performance against a previous package
    Weekly {
        /// Path to the current period's data package (JSON)
        package: PathBuf,

        /// Path to the previous period's data package (JSON)
        #[arg(long)]
        previous: Option<PathBuf>,

        /// Emit the comparison as JSON instead of formatted output
        #[arg(long)]
        json: bool,
    },

    /// Detect the account's niche and content categories
    Niche {
        /// Path to the raw data package (JSON)
        package: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aperture=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Report { package, json } => {
            let package = load_package(&package)?;
            let options = ReportOptions {
                top_posts: config.top_posts,
                ..Default::default()
            };
            let report = build_report(&package, &options, config.tip_selector().as_ref(), Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_report(&report);
            }
        }

        Commands::Achievements {
            package,
            previous,
            json,
        } => {
            let package = load_package(&package)?;
            let stored: Vec<achievements::Achievement> = match previous {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path).with_context(|| {
                        format!("Failed to read previous state from {}", path.display())
                    })?;
                    serde_json::from_str(&raw).context("Previous state is not valid JSON")?
                }
                None => vec![],
            };

            let now = Utc::now();
            let evaluated =
                achievements::evaluate(&package.profile, &package.media, &package.history, now);
            let merged = achievements::merge_unlock_timestamps(&stored, evaluated, now);
            let stats = achievements::calculate_user_stats(&merged);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "achievements": merged,
                        "stats": stats,
                    }))?
                );
            } else {
                terminal::display_achievements(&merged, &stats);
            }
        }

        Commands::Insights { package, json } => {
            let package = load_package(&package)?;
            let posting = patterns::calculate_posting_patterns(&package.media);
            let wins = insights::generate_weekly_wins(&package.profile, &package.media);
            let smart =
                insights::generate_smart_insights(&package.profile, &package.media, &posting);
            let notifications =
                insights::generate_notifications(&package.profile, &package.media, &posting);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "wins": wins,
                        "insights": smart,
                        "notifications": notifications,
                    }))?
                );
            } else {
                terminal::display_insights(&wins, &smart, &notifications);
            }
        }

        Commands::Weekly {
            package,
            previous,
            json,
        } => {
            let package = load_package(&package)?;
            let previous_totals = match previous {
                Some(path) => Some(PeriodTotals::from_posts(&load_package(&path)?.media)),
                None => None,
            };
            let weekly = compare_periods(
                &package.media,
                previous_totals,
                config.tip_selector().as_ref(),
                Utc::now(),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&weekly)?);
            } else {
                terminal::display_weekly(&weekly);
            }
        }

        Commands::Niche { package } => {
            let package = load_package(&package)?;
            let niche = classify::detect_niche(&package.media);
            let buckets = classify::categorize_by_bucket(&package.media);
            let topics =
                classify::categorize_by_keywords(&package.media, classify::DEFAULT_NICHE_RULES);
            terminal::display_niche(&niche, &buckets, &topics);
        }
    }

    Ok(())
}

/// Read and parse a raw data package from disk.
fn load_package(path: &Path) -> Result<RawDataPackage> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data package from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid data package", path.display()))
}
