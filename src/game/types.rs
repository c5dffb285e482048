//! Core domain types for the memory game.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Shape category of a card face.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    /// Circle.
    Circle,
    /// Square.
    Square,
    /// Triangle.
    Triangle,
    /// Diamond.
    Diamond,
    /// Star.
    Star,
    /// Heart.
    Heart,
    /// Hexagon.
    Hexagon,
    /// Cross.
    Cross,
}

/// Colour of a card face.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Colour {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
}

/// Immutable identity of a card.
///
/// Two cards match exactly when both `shape` and `colour` are equal;
/// equality on this type is the match predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    /// Shape category.
    pub shape: Shape,
    /// Colour.
    pub colour: Colour,
}

impl CardFace {
    /// Creates a card face from its two attributes.
    pub fn new(shape: Shape, colour: Colour) -> Self {
        Self { shape, colour }
    }

    /// Returns true when both shape and colour are equal.
    pub fn matches(&self, other: &CardFace) -> bool {
        self == other
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.colour, self.shape)
    }
}

/// Index of a card slot on the board.
pub type CardId = usize;

/// Orientation capability every card implementation must satisfy.
///
/// The board controller drives cards only through this interface plus
/// face reads; it does not know how cards render.
pub trait Flippable {
    /// Toggles orientation. Side effect only.
    fn flip(&mut self);

    /// Returns true when the card is face-up.
    fn is_face_up(&self) -> bool;
}

/// A card on the board: immutable face, mutable orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face: CardFace,
    face_up: bool,
}

impl Card {
    /// Creates a face-down card at the given slot.
    pub fn new(id: CardId, face: CardFace) -> Self {
        Self {
            id,
            face,
            face_up: false,
        }
    }

    /// Returns the card's slot index.
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Returns the card's identity.
    pub fn face(&self) -> &CardFace {
        &self.face
    }
}

impl Flippable for Card {
    fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    fn is_face_up(&self) -> bool {
        self.face_up
    }
}
