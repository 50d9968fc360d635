use std::env;

use anyhow::Result;

use crate::insights::tips::{DayRotation, Fixed, TipSelector};

/// How the weekly smart tip is chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum TipMode {
    /// Rotate through the tip list by day of week (default)
    Rotate,
    /// Always use the tip at this index
    Fixed(usize),
}

/// Central configuration loaded from environment variables.
///
/// Everything has a default — the CLI works out of the box on a bare
/// environment. The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// How many top posts to include in reports (APERTURE_TOP_POSTS)
    pub top_posts: usize,
    /// Tip selection mode (APERTURE_TIPS: "rotate" or a fixed index)
    pub tip_mode: TipMode,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let top_posts = match env::var("APERTURE_TOP_POSTS") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("APERTURE_TOP_POSTS must be a positive integer, got {raw:?}")
            })?,
            Err(_) => 5,
        };

        let tip_mode = match env::var("APERTURE_TIPS").as_deref() {
            Ok("rotate") | Err(_) => TipMode::Rotate,
            Ok(raw) => match raw.parse() {
                Ok(index) => TipMode::Fixed(index),
                Err(_) => {
                    anyhow::bail!("APERTURE_TIPS must be \"rotate\" or a tip index, got {raw:?}")
                }
            },
        };

        Ok(Self {
            top_posts,
            tip_mode,
        })
    }

    /// The tip selector matching the configured mode.
    pub fn tip_selector(&self) -> Box<dyn TipSelector> {
        match self.tip_mode {
            TipMode::Rotate => Box::new(DayRotation),
            TipMode::Fixed(index) => Box::new(Fixed(index)),
        }
    }
}
