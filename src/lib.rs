pub mod card;
pub mod cli;
pub mod config;
pub mod constants;
pub mod deck;
pub mod feed;
pub mod gesture;
pub mod site;
pub mod state;

pub use card::{Card, CardVisual, Overlay, Transform};
pub use deck::{DeckController, DeckTiming};
pub use gesture::Direction;
pub use state::DeckState;
