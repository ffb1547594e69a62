use serde::Serialize;

use crate::constants::EXIT_ROTATION;
use crate::gesture::Direction;

/// One entry of the deck, as handed over by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub link: String,
    pub image: String,
    pub is_primary_action: bool,
}

impl Card {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        image: impl Into<String>,
        is_primary_action: bool,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            image: image.into(),
            is_primary_action,
        }
    }

    pub fn action_label(&self) -> &'static str {
        if self.is_primary_action { "▶ Watch Now" } else { "🌐 Visit Now" }
    }

    pub fn action_class(&self) -> &'static str {
        if self.is_primary_action { "watch-now" } else { "visit-now" }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Positive,
    Negative,
}

/// Where a card sits relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Centered,
    Queued,          // Parked one screen below, waiting for its turn
    Exit(Direction), // Thrown off-screen
}

impl Transform {
    pub fn css(&self) -> String {
        match self {
            Transform::Centered => "translateY(0)".to_string(),
            Transform::Queued => "translateY(100%)".to_string(),
            Transform::Exit(Direction::Right) => format!("translateX(100%) rotate({EXIT_ROTATION}deg)"),
            Transform::Exit(Direction::Left) => format!("translateX(-100%) rotate(-{EXIT_ROTATION}deg)"),
            Transform::Exit(Direction::Up) => "translateY(-100%)".to_string(),
        }
    }
}

/// Presentation state of a single card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisual {
    pub transform: Transform,
    pub opacity: f32,
    pub interactive: bool,
    pub z_index: usize,
}

impl CardVisual {
    pub fn queued(z_index: usize) -> Self {
        Self {
            transform: Transform::Queued,
            opacity: 0.0,
            interactive: false,
            z_index,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Inline style carrying this visual into markup.
    pub fn style(&self) -> String {
        format!(
            "z-index:{}; transform:{}; opacity:{}; pointer-events:{}",
            self.z_index,
            self.transform.css(),
            self.opacity,
            if self.interactive { "auto" } else { "none" },
        )
    }
}
