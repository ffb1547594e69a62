use crate::gesture::Direction;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DeckState {
    Idle(usize),                  // Card at the cursor is shown and accepts input
    Dismissing(usize, Direction), // Card at the cursor is leaving, waiting for the settle delay
    Exhausted,                    // Cursor ran past the last card
}

impl DeckState {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DeckState::Exhausted)
    }
}
