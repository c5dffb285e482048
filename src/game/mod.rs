mod board;
mod deck;
mod types;

pub use board::{BoardController, ClickOutcome, IgnoreReason, TurnPhase};
pub use deck::{DeckError, deal};
pub use types::{Card, CardFace, CardId, Colour, Flippable, Shape};
