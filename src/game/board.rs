//! Turn-cycle state machine for the memory board.
//!
//! The controller owns the cards, a two-slot selection buffer, the
//! evaluation lock, the click counter, and the win flag. Every transition
//! is the result of a [`BoardController::click`] or a timer-driven
//! [`BoardController::resolve_mismatch`].

use super::deck::{self, DeckError};
use super::types::{Card, CardId, Flippable};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Observable phase of the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// No card selected.
    Idle,
    /// One card face-up, awaiting a second selection.
    OneSelected,
    /// A mismatched pair is face-up and the lock is held until the
    /// flip-back resolves.
    Evaluating,
    /// Every card is face-up; no further clicks are accepted.
    Won,
}

/// Why a click was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The game is already won.
    GameFinished,
    /// The evaluation lock is held; clicks are dropped, not queued.
    Locked,
    /// No card exists at that slot.
    NoSuchCard,
    /// The card is already face-up (including the current first selection).
    AlreadyFaceUp,
}

/// Explicit result of a click - the state transition that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was dropped without changing any state.
    Ignored(IgnoreReason),
    /// First card of a pair flipped face-up.
    Selected,
    /// Second card flipped and the pair matched; board stays open.
    Matched,
    /// Second card flipped and the pair did not match. The lock is held;
    /// the host must schedule `resolve_mismatch(generation)` after the
    /// flip-back delay.
    Mismatch {
        /// Generation token guarding the pending flip-back.
        generation: u64,
    },
    /// The matching pair completed the board.
    Won {
        /// Final click count for the finished game.
        total_clicks: u32,
    },
}

/// Board controller: enforces game rules and turn sequencing.
///
/// One instance per rendered widget; never shared between sessions.
#[derive(Debug, Clone)]
pub struct BoardController {
    cards: Vec<Card>,
    first: Option<CardId>,
    second: Option<CardId>,
    checking: bool,
    total_clicks: u32,
    game_over: bool,
    generation: u64,
}

impl BoardController {
    /// Creates a controller with a freshly dealt board of `pair_count` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError`] if `pair_count` exceeds the face identity pool.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(pair_count: usize, rng: &mut R) -> Result<Self, DeckError> {
        let cards = deck::deal(pair_count, rng)?;
        info!(pair_count, cards = cards.len(), "Board dealt");
        Ok(Self {
            cards,
            first: None,
            second: None,
            checking: false,
            total_clicks: 0,
            game_over: false,
            generation: 0,
        })
    }

    /// Restarts the game in place: new shuffled deck, counters zeroed.
    ///
    /// Increments the generation so a flip-back timer still pending from
    /// the previous board cannot mutate the new one.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError`] if `pair_count` exceeds the face identity pool.
    #[instrument(skip(self, rng), fields(generation = self.generation))]
    pub fn restart<R: Rng>(&mut self, pair_count: usize, rng: &mut R) -> Result<(), DeckError> {
        self.cards = deck::deal(pair_count, rng)?;
        self.first = None;
        self.second = None;
        self.checking = false;
        self.total_clicks = 0;
        self.game_over = false;
        self.generation += 1;
        info!(generation = self.generation, "Board restarted");
        Ok(())
    }

    /// Handles a click on the card at `id`.
    #[instrument(skip(self), fields(clicks = self.total_clicks))]
    pub fn click(&mut self, id: CardId) -> ClickOutcome {
        if self.game_over {
            return ClickOutcome::Ignored(IgnoreReason::GameFinished);
        }
        if self.checking {
            debug!(id, "Click dropped while lock held");
            return ClickOutcome::Ignored(IgnoreReason::Locked);
        }
        let Some(card) = self.cards.get_mut(id) else {
            warn!(id, "Click on nonexistent card slot");
            return ClickOutcome::Ignored(IgnoreReason::NoSuchCard);
        };
        // Also covers re-clicking the current first selection.
        if card.is_face_up() {
            return ClickOutcome::Ignored(IgnoreReason::AlreadyFaceUp);
        }

        card.flip();
        self.total_clicks += 1;

        let Some(first) = self.first else {
            self.first = Some(id);
            debug!(id, "First card selected");
            return ClickOutcome::Selected;
        };

        self.second = Some(id);
        self.evaluate(first, id)
    }

    /// Compares the two selected cards and resolves or arms the flip-back.
    fn evaluate(&mut self, first: CardId, second: CardId) -> ClickOutcome {
        if self.cards[first].face() == self.cards[second].face() {
            self.clear_selection();
            if self.all_face_up() {
                self.game_over = true;
                info!(total_clicks = self.total_clicks, "Game won");
                return ClickOutcome::Won {
                    total_clicks: self.total_clicks,
                };
            }
            debug!(first, second, "Pair matched");
            return ClickOutcome::Matched;
        }

        // Lock until the timer flips both cards back.
        self.checking = true;
        debug!(first, second, generation = self.generation, "Pair mismatched");
        ClickOutcome::Mismatch {
            generation: self.generation,
        }
    }

    /// Flips a pending mismatched pair back face-down and releases the lock.
    ///
    /// No-op returning `false` when `generation` is stale (a restart
    /// happened while the timer was outstanding) or no mismatch is pending.
    #[instrument(skip(self), fields(current = self.generation))]
    pub fn resolve_mismatch(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, "Stale flip-back timer ignored");
            return false;
        }
        if !self.checking {
            return false;
        }
        if let (Some(first), Some(second)) = (self.first, self.second) {
            self.cards[first].flip();
            self.cards[second].flip();
        }
        self.clear_selection();
        debug!("Mismatch resolved, lock released");
        true
    }

    fn clear_selection(&mut self) {
        self.first = None;
        self.second = None;
        self.checking = false;
    }

    /// True when every card on the board is face-up. An empty board is
    /// never won: no result should be recorded for a game nobody played.
    fn all_face_up(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Flippable::is_face_up)
    }

    /// Returns the observable turn phase.
    pub fn phase(&self) -> TurnPhase {
        if self.game_over {
            TurnPhase::Won
        } else if self.checking {
            TurnPhase::Evaluating
        } else if self.first.is_some() {
            TurnPhase::OneSelected
        } else {
            TurnPhase::Idle
        }
    }

    /// Returns the cards in board order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `id`, if present.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Total clicks so far this game.
    pub fn total_clicks(&self) -> u32 {
        self.total_clicks
    }

    /// True once the board has been completed.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current generation token.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
