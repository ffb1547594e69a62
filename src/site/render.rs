use std::time::Duration;

use minijinja::Environment;
use serde::Serialize;

use crate::card::{Card, Transform};
use crate::config::{SiteConfig, seconds_to_ms};
use crate::constants::CARD_TRANSITION;
use crate::deck::DeckController;
use crate::gesture::Direction;
use crate::site::SiteError;
use crate::site::categories::{Category, group_by_category};

const HOME_TEMPLATE: &str = "home.html";
const SWIPE_TEMPLATE: &str = "swipe.html";
const GRID_TEMPLATE: &str = "grid.html";

#[derive(Serialize)]
struct CardView<'a> {
    title: &'a str,
    link: &'a str,
    image: &'a str,
    action_class: &'static str,
    action_label: &'static str,
    style: String,
}

impl<'a> CardView<'a> {
    fn new(card: &'a Card, style: String) -> Self {
        Self {
            title: &card.title,
            link: &card.link,
            image: &card.image,
            action_class: card.action_class(),
            action_label: card.action_label(),
            style,
        }
    }
}

#[derive(Serialize)]
struct ScriptParams {
    settle_ms: u64,
    overlay_ms: u64,
    threshold: f32,
    card_transition_ms: u64,
    centered: String,
    queued: String,
    exit_right: String,
    exit_left: String,
    exit_up: String,
}

#[derive(Serialize)]
struct SwipeContext<'a> {
    config: &'a SiteConfig,
    cards: Vec<CardView<'a>>,
    script: ScriptParams,
}

#[derive(Serialize)]
struct GridSection<'a> {
    name: &'a str,
    cards: Vec<CardView<'a>>,
}

#[derive(Serialize)]
struct GridContext<'a> {
    config: &'a SiteConfig,
    sections: Vec<GridSection<'a>>,
    total: usize,
}

#[derive(Serialize)]
struct HomeContext<'a> {
    config: &'a SiteConfig,
}

/// Holds the compiled page templates.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, SiteError> {
        let mut env = Environment::new();
        env.add_template(HOME_TEMPLATE, include_str!("templates/home.html"))?;
        env.add_template(SWIPE_TEMPLATE, include_str!("templates/swipe.html"))?;
        env.add_template(GRID_TEMPLATE, include_str!("templates/grid.html"))?;
        Ok(Self { env })
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, SiteError> {
        let output = self.env.get_template(name)?.render(ctx)?;
        Ok(output)
    }

    pub fn render_home(&self, config: &SiteConfig) -> Result<String, SiteError> {
        self.render(HOME_TEMPLATE, HomeContext { config })
    }

    /// Renders the swipe page with every card styled as a freshly built deck
    /// shows it; the embedded script takes over from there.
    pub fn render_swipe(&self, config: &SiteConfig, deck: &DeckController) -> Result<String, SiteError> {
        let cards = deck
            .cards()
            .iter()
            .zip(deck.visuals())
            .map(|(card, visual)| CardView::new(card, visual.style()))
            .collect();

        let timing = deck.timing();
        let script = ScriptParams {
            settle_ms: millis(timing.settle_delay),
            overlay_ms: millis(timing.overlay_duration),
            threshold: timing.swipe_threshold,
            card_transition_ms: seconds_to_ms(CARD_TRANSITION),
            centered: Transform::Centered.css(),
            queued: Transform::Queued.css(),
            exit_right: Transform::Exit(Direction::Right).css(),
            exit_left: Transform::Exit(Direction::Left).css(),
            exit_up: Transform::Exit(Direction::Up).css(),
        };

        self.render(SWIPE_TEMPLATE, SwipeContext { config, cards, script })
    }

    pub fn render_grid(&self, config: &SiteConfig, cards: &[Card]) -> Result<String, SiteError> {
        let categories = group_by_category(cards);
        let sections = categories.iter().map(|category| section_view(category)).collect();
        self.render(GRID_TEMPLATE, GridContext {
            config,
            sections,
            total: cards.len(),
        })
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn section_view<'a>(category: &'a Category<'a>) -> GridSection<'a> {
    GridSection {
        name: category.name.as_str(),
        cards: category.cards.iter().map(|card| CardView::new(*card, String::new())).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> DeckController {
        DeckController::new(vec![
            Card::new("Trailers - <Teaser>", "https://youtu.be/dQw4w9WgXcQ", "a.jpg", true),
            Card::new("Blog", "https://example.com", "b.jpg", false),
        ])
    }

    #[test]
    fn test_swipe_page_stacks_and_styles_cards() {
        let html = Renderer::new().unwrap().render_swipe(&SiteConfig::default(), &deck()).unwrap();
        assert!(html.contains("z-index:2; transform:translateY(0); opacity:1; pointer-events:auto"));
        assert!(html.contains("z-index:1; transform:translateY(100%); opacity:0; pointer-events:none"));
        assert!(html.contains("class=\"watch-now\""));
        assert!(html.contains("class=\"visit-now\""));
    }

    #[test]
    fn test_swipe_page_escapes_titles() {
        let html = Renderer::new().unwrap().render_swipe(&SiteConfig::default(), &deck()).unwrap();
        assert!(html.contains("Trailers - &lt;Teaser&gt;"));
        assert!(!html.contains("<Teaser>"));
    }

    #[test]
    fn test_swipe_script_uses_deck_timing() {
        let mut config = SiteConfig::default();
        config.timing.settle_delay_ms = 300;
        let deck = DeckController::with_timing(deck().cards().to_vec(), config.deck_timing());
        let html = Renderer::new().unwrap().render_swipe(&config, &deck).unwrap();
        assert!(html.contains("const SETTLE_MS = 300;"));
        assert!(html.contains("const OVERLAY_MS = 500;"));
        assert!(html.contains("translateX(-100%) rotate(-15deg)"));
        assert!(html.contains("MARKED AS WATCHED"));
        assert!(html.contains("deckexhausted"));
        assert!(html.contains("addEventListener('touchcancel'"));
    }

    #[test]
    fn test_swipe_script_keeps_exact_milliseconds() {
        let config = SiteConfig::parse("[timing]\nsettle_delay_ms = 16777217\noverlay_ms = 1\n").unwrap();
        let deck = DeckController::with_timing(deck().cards().to_vec(), config.deck_timing());
        let html = Renderer::new().unwrap().render_swipe(&config, &deck).unwrap();
        assert!(html.contains("const SETTLE_MS = 16777217;"));
        assert!(html.contains("const OVERLAY_MS = 1;"));
    }

    #[test]
    fn test_grid_page_groups_by_category() {
        let renderer = Renderer::new().unwrap();
        let html = renderer.render_grid(&SiteConfig::default(), deck().cards()).unwrap();
        let trailers = html.find("<h2 class=\"category\">Trailers</h2>").unwrap();
        let other = html.find("<h2 class=\"category\">Other</h2>").unwrap();
        assert!(trailers < other);
    }

    #[test]
    fn test_home_page_links_to_swipe_page() {
        let mut config = SiteConfig::default();
        config.pages.swipe = "deck.html".to_string();
        let html = Renderer::new().unwrap().render_home(&config).unwrap();
        assert!(html.contains("href=\"deck.html\""));
        assert!(html.contains("<h1>TFI WIKI</h1>"));
    }
}
