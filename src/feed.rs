//! Turns the CSV feed into deck cards.
//!
//! The feed needs `title` and `url` columns; `thumbnail` is optional. A card
//! gets its image from the thumbnail column when present, from the YouTube
//! thumbnail service when the URL is a video, and from a placeholder
//! otherwise.

pub mod csv;
pub mod video;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::card::Card;
use crate::constants::PLACEHOLDER_THUMBNAIL;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read feed {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("feed is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("feed has no header row")]
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct FeedOptions {
    /// Drop rows whose URL is not a recognizable video.
    pub videos_only: bool,
    /// Directory local thumbnail paths are checked against.
    pub base_dir: Option<PathBuf>,
}

struct Columns {
    title: usize,
    url: usize,
    thumbnail: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self, FeedError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        Ok(Self {
            title: find("title").ok_or(FeedError::MissingColumn("title"))?,
            url: find("url").ok_or(FeedError::MissingColumn("url"))?,
            thumbnail: find("thumbnail"),
        })
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", |s| s.trim())
}

/// Reads and parses a feed file. Relative thumbnail paths are checked
/// against the file's directory.
pub fn load_feed(path: &Path, options: &FeedOptions) -> Result<Vec<Card>, FeedError> {
    let text = fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut options = options.clone();
    if options.base_dir.is_none() {
        options.base_dir = path.parent().map(Path::to_path_buf);
    }
    parse_feed(&text, &options)
}

pub fn parse_feed(text: &str, options: &FeedOptions) -> Result<Vec<Card>, FeedError> {
    let mut rows = csv::parse_rows(text).into_iter();
    let header = rows.next().ok_or(FeedError::Empty)?;
    let columns = Columns::from_header(&header)?;

    let mut cards = Vec::new();
    for row in rows {
        let title = cell(&row, columns.title);
        let url = cell(&row, columns.url);
        let thumbnail = columns.thumbnail.map_or("", |i| cell(&row, i));

        if let Some(card) = build_card(title, url, thumbnail, options) {
            cards.push(card);
        }
    }

    debug!(cards = cards.len(), "feed parsed");
    Ok(cards)
}

fn build_card(title: &str, url: &str, thumbnail: &str, options: &FeedOptions) -> Option<Card> {
    let video_id = video::extract_video_id(url);

    if options.videos_only && video_id.is_none() {
        warn!(url, "Skipping invalid URL");
        return None;
    }

    let card = if !thumbnail.is_empty() {
        if !thumbnail.starts_with("http") && !local_file_exists(thumbnail, options.base_dir.as_deref()) {
            warn!(thumbnail, title, "thumbnail not found");
        }
        Card::new(title, url, thumbnail, video_id.is_some())
    } else if let Some(id) = video_id {
        Card::new(title, url, video::thumbnail_url(id), true)
    } else {
        Card::new(title, url, PLACEHOLDER_THUMBNAIL, false)
    };
    Some(card)
}

fn local_file_exists(path: &str, base_dir: Option<&Path>) -> bool {
    base_dir.is_some_and(|dir| dir.join(path).exists()) || Path::new(path).exists()
}
