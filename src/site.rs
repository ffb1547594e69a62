//! Static pages: the landing page, the swipe deck and the category grid.

pub mod categories;
pub mod render;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::card::Card;
use crate::config::SiteConfig;
use crate::deck::DeckController;
use crate::site::render::Renderer;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("failed to render page")]
    Template(#[from] minijinja::Error),

    #[error("output path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Which pages to emit.
#[derive(Debug, Clone, Copy)]
pub struct PageSelection {
    pub home: bool,
    pub grid: bool,
}

impl Default for PageSelection {
    fn default() -> Self {
        Self { home: true, grid: false }
    }
}

/// Renders the selected pages for `cards` and writes them into `out_dir`.
/// Returns the written paths, swipe page first.
pub fn build_site(
    out_dir: &Path,
    config: &SiteConfig,
    cards: Vec<Card>,
    pages: PageSelection,
) -> Result<Vec<PathBuf>, SiteError> {
    ensure_directory(out_dir)?;
    let renderer = Renderer::new()?;

    let deck = DeckController::with_timing(cards, config.deck_timing());
    let mut written = Vec::new();

    let swipe = renderer.render_swipe(config, &deck)?;
    written.push(write_page(out_dir, &config.pages.swipe, &swipe)?);

    if pages.home {
        let home = renderer.render_home(config)?;
        written.push(write_page(out_dir, &config.pages.home, &home)?);
    }

    if pages.grid {
        let grid = renderer.render_grid(config, deck.cards())?;
        written.push(write_page(out_dir, &config.pages.grid, &grid)?);
    }

    Ok(written)
}

fn write_page(out_dir: &Path, name: &str, html: &str) -> Result<PathBuf, SiteError> {
    let path = out_dir.join(name);
    fs::write(&path, html).map_err(|source| SiteError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), bytes = html.len(), "page written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), SiteError> {
    if dir.exists() && !dir.is_dir() {
        return Err(SiteError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| SiteError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
