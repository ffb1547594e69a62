//! Site configuration, read from an optional TOML file.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! site_name = "MY WIKI"
//! positive_label = "INTERESTED"
//!
//! [timing]
//! settle_delay_ms = 400
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::deck::DeckTiming;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub hero_image: String,
    pub tagline: String,
    pub footer: String,
    pub swipe_title: String,
    pub grid_title: String,
    pub positive_label: String,
    pub negative_label: String,
    pub pages: PageNames,
    pub timing: TimingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "TFI WIKI".to_string(),
            hero_image: HERO_IMAGE.to_string(),
            tagline: "Click the poster to explore".to_string(),
            footer: "© 2025 TFI WIKI | All Rights Reserved".to_string(),
            swipe_title: "Swipe Website".to_string(),
            grid_title: "Browse by Category".to_string(),
            positive_label: "MARKED AS WATCHED".to_string(),
            negative_label: "NOT INTERESTED".to_string(),
            pages: PageNames::default(),
            timing: TimingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageNames {
    pub home: String,
    pub swipe: String,
    pub grid: String,
}

impl Default for PageNames {
    fn default() -> Self {
        Self {
            home: HOME_PAGE.to_string(),
            swipe: SWIPE_PAGE.to_string(),
            grid: GRID_PAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub settle_delay_ms: u64,
    pub overlay_ms: u64,
    pub swipe_threshold: f32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: seconds_to_ms(SETTLE_DELAY),
            overlay_ms: seconds_to_ms(OVERLAY_DURATION),
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl From<TimingConfig> for DeckTiming {
    fn from(timing: TimingConfig) -> Self {
        DeckTiming {
            settle_delay: Duration::from_millis(timing.settle_delay_ms),
            overlay_duration: Duration::from_millis(timing.overlay_ms),
            swipe_threshold: timing.swipe_threshold,
        }
    }
}

impl TimingConfig {
    fn validate(&self) -> Result<()> {
        ensure!(
            self.swipe_threshold.is_finite() && self.swipe_threshold >= 0.0,
            "timing.swipe_threshold must be a finite, non-negative number of pixels (got {})",
            self.swipe_threshold
        );
        ensure!(
            self.settle_delay_ms <= MAX_TIMER_MS,
            "timing.settle_delay_ms must be at most {MAX_TIMER_MS} (got {})",
            self.settle_delay_ms
        );
        ensure!(
            self.overlay_ms <= MAX_TIMER_MS,
            "timing.overlay_ms must be at most {MAX_TIMER_MS} (got {})",
            self.overlay_ms
        );
        Ok(())
    }
}

pub fn seconds_to_ms(seconds: f32) -> u64 {
    (seconds * 1000.0).round() as u64
}

impl SiteConfig {
    /// Loads configuration from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.timing.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    pub fn deck_timing(&self) -> DeckTiming {
        self.timing.into()
    }
}
