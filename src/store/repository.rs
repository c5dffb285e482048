//! Sqlite-backed result store.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::store::{GameResult, NewGameResult, ResultStore, StoreError, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Result store backed by a sqlite database file.
///
/// Connections are established per operation; blocking diesel calls run
/// on the tokio blocking pool.
#[derive(Debug, Clone)]
pub struct ResultRepository {
    db_path: String,
}

impl ResultRepository {
    /// Creates a repository for the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Self {
        info!(path = %db_path, "Creating ResultRepository");
        Self { db_path }
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the connection or a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migration error: {}", e)))?;
        debug!("Migrations up to date");
        Ok(())
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    fn create_sync(&self, record: NewGameResult) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let stored: GameResult = diesel::insert_into(schema::game_results::table)
            .values(&record)
            .returning(GameResult::as_returning())
            .get_result(&mut conn)?;
        info!(id = stored.id(), clicks = stored.clicks(), "Game result recorded");
        Ok(())
    }

    fn list_all_sync(&self) -> Result<Vec<GameResult>, StoreError> {
        let mut conn = self.connection()?;
        let results = schema::game_results::table.load::<GameResult>(&mut conn)?;
        info!(count = results.len(), "Game results loaded");
        Ok(results)
    }
}

#[async_trait]
impl ResultStore for ResultRepository {
    #[instrument(skip(self), fields(clicks = record.clicks()))]
    async fn create(&self, record: NewGameResult) -> Result<(), StoreError> {
        let repo = self.clone();
        tokio::task::spawn_blocking(move || repo.create_sync(record)).await?
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<GameResult>, StoreError> {
        let repo = self.clone();
        tokio::task::spawn_blocking(move || repo.list_all_sync()).await?
    }
}
