//! Pairup library - memory-matching card game engine
//!
//! A headless memory game: a board of face-down cards in matched pairs,
//! a turn-taking state machine, click counting, persistence of completed
//! games, and aggregate statistics over past results.
//!
//! # Architecture
//!
//! - **Game**: card domain types, deck generation, and the board
//!   controller state machine
//! - **Session**: one board wired to a result store, flip-back timers,
//!   and restart-guarded statistics queries
//! - **Store**: the persistence collaborator (sqlite-backed or in-memory)
//! - **Stats**: pure aggregation over stored click counts
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use pairup::{ClickOutcome, GameConfig, GameSession, MemoryStore};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//! let mut session = GameSession::new(GameConfig::default(), store)?;
//!
//! if let ClickOutcome::Mismatch { generation } = session.click(0).await {
//!     session.run_flip_back(generation).await;
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod session;
mod store;

pub mod stats;

// Crate-level exports - Configuration
pub use config::{FLIP_BACK_DELAY, GameConfig, GridSize};

// Crate-level exports - Game types
pub use game::{
    BoardController, Card, CardFace, CardId, ClickOutcome, Colour, DeckError, Flippable,
    IgnoreReason, Shape, TurnPhase, deal,
};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError, StatsProbe};

// Crate-level exports - Persistence
pub use store::{
    GameResult, MemoryStore, NewGameResult, ResultRepository, ResultStore, StoreError,
};
