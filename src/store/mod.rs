//! Persistence layer for completed-game records.
//!
//! The engine depends only on the [`ResultStore`] collaborator interface:
//! append one record, scan them all. No filtering, pagination, or ordering
//! is required, and no transactional guarantees are assumed; concurrent
//! writers may interleave arbitrarily.

mod error;
mod memory;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::StoreError;
pub use memory::MemoryStore;
pub use models::{GameResult, NewGameResult};
pub use repository::ResultRepository;

use async_trait::async_trait;

/// The persistence collaborator consumed by the game session.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Appends one completed-game record.
    async fn create(&self, record: NewGameResult) -> Result<(), StoreError>;

    /// Returns every stored record.
    async fn list_all(&self) -> Result<Vec<GameResult>, StoreError>;
}
