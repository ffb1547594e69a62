use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config::SiteConfig;
use crate::constants::DEFAULT_INPUT;
use crate::feed::{FeedOptions, load_feed};
use crate::site::{PageSelection, build_site};

/// Builds a static swipe-card site from a CSV list of videos and links.
#[derive(Debug, Parser)]
#[command(name = "swipedeck", version)]
pub struct Args {
    /// CSV feed with `title`, `url` and optional `thumbnail` columns
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Directory the pages are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// TOML file overriding page texts, file names and timings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also write the category grid page
    #[arg(long)]
    pub grid: bool,

    /// Skip the landing page
    #[arg(long)]
    pub no_home: bool,

    /// Keep only rows whose URL is a recognizable video
    #[arg(long)]
    pub videos_only: bool,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG wins when set
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn pages(&self) -> PageSelection {
        PageSelection {
            home: !self.no_home,
            grid: self.grid,
        }
    }
}

pub fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let config = SiteConfig::load_or_default(args.config.as_deref())?;

    let options = FeedOptions {
        videos_only: args.videos_only,
        base_dir: None,
    };
    let cards = load_feed(&args.input, &options)
        .with_context(|| format!("Failed to load feed {}", args.input.display()))?;
    info!(input = %args.input.display(), cards = cards.len(), "feed loaded");

    let written = build_site(&args.out_dir, &config, cards, args.pages())
        .with_context(|| format!("Failed to build site in {}", args.out_dir.display()))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("swipedeck").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.input, PathBuf::from("videos.csv"));
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(!args.grid && !args.no_home && !args.videos_only);
        assert_eq!(args.log_level(), "info");
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["-v"]).log_level(), "debug");
        assert_eq!(parse(&["-vvv"]).log_level(), "trace");
    }

    #[test]
    fn test_run_writes_selected_pages() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("feed.csv");
        fs::write(&input, "title,url\nClip,https://youtu.be/dQw4w9WgXcQ\n").unwrap();
        let out = dir.path().join("site");

        let args = parse(&[
            input.to_str().unwrap(),
            "--out-dir",
            out.to_str().unwrap(),
            "--grid",
            "--no-home",
        ]);
        let written = run(&args).unwrap();
        assert_eq!(written, vec![out.join("index.html"), out.join("grid.html")]);
    }

    #[test]
    fn test_run_reports_missing_feed() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        let args = parse(&[missing.to_str().unwrap()]);
        let err = run(&args).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load feed"));
    }
}
