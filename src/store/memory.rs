//! In-memory result store for tests and database-less play.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, instrument};

use crate::store::{GameResult, NewGameResult, ResultStore, StoreError};

/// Result store held entirely in memory.
///
/// Supports failure injection on the write path so callers can exercise
/// their non-fatal error handling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<GameResult>>,
    failing_creates: AtomicU32,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `n` create calls fail.
    pub fn fail_next_creates(&self, n: u32) {
        self.failing_creates.store(n, Ordering::SeqCst);
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// True when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    #[instrument(skip(self), fields(clicks = record.clicks()))]
    async fn create(&self, record: NewGameResult) -> Result<(), StoreError> {
        if self
            .failing_creates
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(StoreError::new("injected create failure"));
        }
        let mut records = self
            .records
            .lock()
            .map_err(|_| StoreError::new("store mutex poisoned"))?;
        let id = records.len() as i32 + 1;
        let completed_at = chrono::Utc::now().naive_utc();
        records.push(GameResult::new(id, *record.clicks(), completed_at));
        debug!(id, "Game result stored in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<GameResult>, StoreError> {
        let records = self
            .records
            .lock()
            .map_err(|_| StoreError::new("store mutex poisoned"))?;
        Ok(records.clone())
    }
}
