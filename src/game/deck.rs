//! Deck generation: paired card identities in uniformly shuffled order.

use super::types::{Card, CardFace, Colour, Shape};
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Error raised when more pairs are requested than distinct faces exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("requested {requested} pairs but only {available} distinct faces exist")]
pub struct DeckError {
    /// Requested pair count.
    pub requested: usize,
    /// Size of the shape × colour identity pool.
    pub available: usize,
}

/// Deals a shuffled deck of `pair_count` matched pairs.
///
/// Picks `pair_count` distinct `(shape, colour)` identities, duplicates each
/// once, and shuffles the resulting `2 * pair_count` cards with Fisher-Yates
/// (uniform over permutations). All cards start face-down; ids are assigned
/// by shuffled position.
///
/// # Errors
///
/// Returns [`DeckError`] if `pair_count` exceeds the identity pool.
#[instrument(skip(rng))]
pub fn deal<R: Rng>(pair_count: usize, rng: &mut R) -> Result<Vec<Card>, DeckError> {
    let mut pool: Vec<CardFace> = Shape::iter()
        .flat_map(|shape| Colour::iter().map(move |colour| CardFace::new(shape, colour)))
        .collect();

    if pair_count > pool.len() {
        return Err(DeckError {
            requested: pair_count,
            available: pool.len(),
        });
    }

    // Shuffle the pool so the chosen identities vary between games.
    pool.shuffle(rng);

    let mut faces: Vec<CardFace> = pool
        .into_iter()
        .take(pair_count)
        .flat_map(|face| [face, face])
        .collect();
    faces.shuffle(rng);

    debug!(pair_count, cards = faces.len(), "Deck dealt");

    Ok(faces
        .into_iter()
        .enumerate()
        .map(|(id, face)| Card::new(id, face))
        .collect())
}
