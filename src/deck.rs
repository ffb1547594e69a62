use std::time::Duration;

use tracing::debug;

use crate::card::{Card, CardVisual, Overlay, Transform};
use crate::constants::*;
use crate::gesture::{Direction, TouchTracker};
use crate::state::DeckState;

/// Timing knobs of the deck. Overlay window and settle delay are independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckTiming {
    pub settle_delay: Duration,
    pub overlay_duration: Duration,
    pub swipe_threshold: f32, // pixels
}

impl Default for DeckTiming {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_secs_f32(SETTLE_DELAY),
            overlay_duration: Duration::from_secs_f32(OVERLAY_DURATION),
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

/// Pending cursor advance of an in-flight dismissal.
#[derive(Debug)]
struct SettleTimer {
    direction: Direction,
    elapsed: f32,
    duration: f32,
}

impl SettleTimer {
    fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }
}

/// Drives a stack of cards: one current card, dismissed by directional input,
/// with the cursor advance committed after the settle delay.
///
/// Time only moves through [`DeckController::update`], so the owner decides
/// the clock (a frame loop, a test, a UI timer).
pub struct DeckController {
    cards: Vec<Card>,
    visuals: Vec<CardVisual>,
    cursor: usize,

    overlay: Overlay,
    overlay_timer: f32,
    pending: Option<SettleTimer>,

    touch: TouchTracker,
    timing: DeckTiming,
    on_exhausted: Option<Box<dyn FnMut()>>,
}

impl DeckController {
    pub fn new(cards: Vec<Card>) -> Self {
        Self::with_timing(cards, DeckTiming::default())
    }

    pub fn with_timing(cards: Vec<Card>, timing: DeckTiming) -> Self {
        // Lower index stacks higher so the current card covers every queued one
        let count = cards.len();
        let visuals = (0..count).map(|i| CardVisual::queued(count - i)).collect();

        let mut deck = Self {
            cards,
            visuals,
            cursor: 0,
            overlay: Overlay::None,
            overlay_timer: 0.0,
            pending: None,
            touch: TouchTracker::new(timing.swipe_threshold),
            timing,
            on_exhausted: None,
        };
        deck.show_card(0);
        debug!(cards = count, "deck initialized");
        deck
    }

    /// Registers a callback fired once, when the last card settles.
    pub fn on_exhausted(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_exhausted = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> DeckState {
        if self.cursor >= self.cards.len() {
            DeckState::Exhausted
        } else if let Some(timer) = &self.pending {
            DeckState::Dismissing(self.cursor, timer.direction)
        } else {
            DeckState::Idle(self.cursor)
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    pub fn visual(&self, index: usize) -> Option<&CardVisual> {
        self.visuals.get(index)
    }

    pub fn visuals(&self) -> &[CardVisual] {
        &self.visuals
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn timing(&self) -> &DeckTiming {
        &self.timing
    }

    /// Starts dismissing the current card. Returns whether the request was
    /// taken; an exhausted deck or an in-flight dismissal drops it.
    pub fn dismiss(&mut self, direction: Direction) -> bool {
        if self.cursor >= self.cards.len() {
            debug!(?direction, "dismiss ignored, deck exhausted");
            return false;
        }
        if self.pending.is_some() {
            debug!(cursor = self.cursor, ?direction, "dismiss ignored, card already leaving");
            return false;
        }

        let visual = &mut self.visuals[self.cursor];
        visual.transform = Transform::Exit(direction);
        visual.interactive = false;

        let overlay = direction.overlay();
        if overlay != Overlay::None {
            self.overlay = overlay;
            self.overlay_timer = 0.0;
        }

        self.pending = Some(SettleTimer {
            direction,
            elapsed: 0.0,
            duration: self.timing.settle_delay.as_secs_f32(),
        });
        debug!(cursor = self.cursor, ?direction, "dismissing card");
        true
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => self.dismiss(direction),
            None => false,
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.touch.begin(x, y);
    }

    pub fn touch_end(&mut self, x: f32, y: f32) -> bool {
        match self.touch.end(x, y) {
            Some(direction) => self.dismiss(direction),
            None => false,
        }
    }

    /// Forgets an interrupted touch so a later `touch_end` cannot pair with it.
    pub fn touch_cancel(&mut self) {
        self.touch.cancel();
    }

    /// Advances the clock by `dt` seconds. Returns whether a dismissal is
    /// still waiting to settle.
    pub fn update(&mut self, dt: f32) -> bool {
        let dt = dt.max(0.0);

        if self.overlay != Overlay::None {
            self.overlay_timer += dt;
            if self.overlay_timer >= self.timing.overlay_duration.as_secs_f32() {
                self.overlay = Overlay::None;
            }
        }

        let settled = match self.pending.as_mut() {
            Some(timer) => timer.tick(dt),
            None => return false,
        };
        if !settled {
            return true;
        }

        self.pending = None;
        self.overlay = Overlay::None;
        self.cursor += 1;
        self.show_card(self.cursor);

        if self.state().is_exhausted() {
            debug!(cursor = self.cursor, "deck exhausted");
            if let Some(callback) = self.on_exhausted.as_mut() {
                callback();
            }
        } else {
            debug!(cursor = self.cursor, "card settled");
        }
        false
    }

    /// Tears the deck down, dropping any pending advance so nothing fires
    /// afterwards. Returns whether a dismissal was cancelled. Dropping the
    /// controller cancels just the same; this only reports it.
    pub fn teardown(mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            debug!(cursor = self.cursor, "pending dismissal cancelled on teardown");
        }
        cancelled
    }

    fn show_card(&mut self, index: usize) {
        for (i, visual) in self.visuals.iter_mut().enumerate() {
            if i == index {
                visual.transform = Transform::Centered;
                visual.opacity = 1.0;
                visual.interactive = true;
            } else if i < index {
                // Dismissed cards keep their exit transform
                visual.opacity = 0.0;
                visual.interactive = false;
            } else {
                visual.transform = Transform::Queued;
                visual.opacity = 0.0;
                visual.interactive = false;
            }
        }
    }
}
