//! Game session: one board controller wired to a result store.
//!
//! The session forwards clicks to the board, persists a record when the
//! board reports a win, drives the mismatch flip-back timer, and serves
//! average-click queries guarded against restarts.

use derive_more::{Display, Error, From};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;
use crate::game::{BoardController, CardId, ClickOutcome, DeckError};
use crate::stats;
use crate::store::{NewGameResult, ResultStore, StoreError};

/// Attempts made on the result write path before giving up.
const WRITE_ATTEMPTS: u32 = 3;

/// Session-level errors surfaced to the front-end.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The statistics read failed; show "unable to compute average".
    #[display("unable to compute average: {_0}")]
    Stats(#[error(source)] StoreError),
    /// The statistics read straddled a restart and was discarded.
    #[display("statistics read superseded by a restart")]
    #[from(skip)]
    Stale,
}

/// One playable game session. One instance per widget; never shared.
pub struct GameSession {
    board: BoardController,
    config: GameConfig,
    store: Arc<dyn ResultStore>,
    epoch: Arc<AtomicU64>,
    rng: SmallRng,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("config", &self.config)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Creates a session with an entropy-seeded shuffle.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError`] if the configured grid needs more pairs than
    /// distinct card faces exist.
    #[instrument(skip(store))]
    pub fn new(config: GameConfig, store: Arc<dyn ResultStore>) -> Result<Self, DeckError> {
        Self::with_rng(config, store, SmallRng::from_entropy())
    }

    /// Creates a session with a caller-supplied rng (deterministic tests).
    ///
    /// # Errors
    ///
    /// Returns [`DeckError`] if the configured grid needs more pairs than
    /// distinct card faces exist.
    #[instrument(skip(store, rng))]
    pub fn with_rng(
        config: GameConfig,
        store: Arc<dyn ResultStore>,
        mut rng: SmallRng,
    ) -> Result<Self, DeckError> {
        let board = BoardController::new(config.grid().pair_count(), &mut rng)?;
        info!(grid = %config.grid(), "Session started");
        Ok(Self {
            board,
            config,
            store,
            epoch: Arc::new(AtomicU64::new(0)),
            rng,
        })
    }

    /// Forwards a click to the board; on a win, persists the result.
    ///
    /// Persistence failures are non-fatal: the win stands, the failure is
    /// logged, and gameplay state is unaffected.
    #[instrument(skip(self))]
    pub async fn click(&mut self, id: CardId) -> ClickOutcome {
        let outcome = self.board.click(id);
        if let ClickOutcome::Won { total_clicks } = outcome {
            self.record_result(total_clicks).await;
        }
        outcome
    }

    /// Writes the completed-game record, retrying a bounded number of times.
    async fn record_result(&self, total_clicks: u32) {
        let record = NewGameResult::new(total_clicks as i32);
        for attempt in 1..=WRITE_ATTEMPTS {
            match self.store.create(record).await {
                Ok(()) => {
                    debug!(total_clicks, attempt, "Game result persisted");
                    return;
                }
                Err(e) => {
                    warn!(total_clicks, attempt, error = %e, "Result write failed");
                }
            }
        }
        warn!(total_clicks, "Giving up on result write; game state unaffected");
    }

    /// Sleeps out the flip-back delay, then resolves the pending mismatch.
    ///
    /// Returns `false` when the timer had gone stale (the board restarted
    /// while it was outstanding) and nothing was mutated.
    #[instrument(skip(self))]
    pub async fn run_flip_back(&mut self, generation: u64) -> bool {
        tokio::time::sleep(self.config.flip_back_delay()).await;
        self.board.resolve_mismatch(generation)
    }

    /// Restarts the session: fresh shuffled board, counters zeroed, and
    /// any in-flight statistics read invalidated.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError`] if the configured grid needs more pairs than
    /// distinct card faces exist.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), DeckError> {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.board
            .restart(self.config.grid().pair_count(), &mut self.rng)
    }

    /// Captures a statistics probe bound to the current epoch.
    ///
    /// The probe can be fetched while the session keeps playing; a fetch
    /// that completes after a restart reports [`SessionError::Stale`]
    /// instead of a stale average.
    pub fn stats_probe(&self) -> StatsProbe {
        StatsProbe {
            store: Arc::clone(&self.store),
            epoch: Arc::clone(&self.epoch),
            started_at: self.epoch.load(Ordering::SeqCst),
        }
    }

    /// Convenience wrapper: probe and fetch in one call.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the read fails or goes stale.
    pub async fn average_clicks(&self) -> Result<Option<f64>, SessionError> {
        self.stats_probe().fetch().await
    }

    /// Read access to the board for rendering.
    pub fn board(&self) -> &BoardController {
        &self.board
    }

    /// The session's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// An in-flight average-clicks query bound to the session epoch at the
/// time it was captured.
pub struct StatsProbe {
    store: Arc<dyn ResultStore>,
    epoch: Arc<AtomicU64>,
    started_at: u64,
}

impl std::fmt::Debug for StatsProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsProbe")
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

impl StatsProbe {
    /// Reads every stored record and computes the rounded mean click count.
    ///
    /// Returns `Ok(None)` when no games have been stored yet.
    ///
    /// # Errors
    ///
    /// [`SessionError::Stats`] when the store read fails,
    /// [`SessionError::Stale`] when a restart happened mid-flight.
    #[instrument(skip(self), fields(epoch = self.started_at))]
    pub async fn fetch(self) -> Result<Option<f64>, SessionError> {
        let records = self.store.list_all().await?;
        if self.epoch.load(Ordering::SeqCst) != self.started_at {
            debug!("Discarding statistics response from before restart");
            return Err(SessionError::Stale);
        }
        if records.is_empty() {
            return Ok(None);
        }
        let clicks: Vec<i64> = records.iter().map(|r| *r.clicks() as i64).collect();
        Ok(Some(stats::mean_rounded(&clicks)))
    }
}
