//! Storage seam for the sync coordinator.
//!
//! The coordinator talks to persistence through [`SyncStore`] so the run
//! logic stays testable without a database; [`PgSyncStore`] is the
//! production implementation over the `holocron-db` repositories.

use holocron_core::ingest::{NewCharacter, NewMovie};
use holocron_core::reconcile::{CreatedCharacter, CreatedMovie};
use holocron_core::types::DbId;
use holocron_db::models::provenance::Provenance;
use holocron_db::repositories::{CharacterRepo, MovieRepo};
use holocron_db::DbPool;

/// The persistence operations one sync run needs.
#[async_trait::async_trait]
pub trait SyncStore: Send + Sync {
    /// Delete all externally sourced rows, characters before movies,
    /// with dependent link rows. Returns (characters, movies) deleted.
    async fn purge_external(&self) -> Result<(u64, u64), sqlx::Error>;

    /// Bulk-insert characters with External provenance. All-or-nothing.
    async fn insert_characters(
        &self,
        characters: &[NewCharacter],
    ) -> Result<Vec<CreatedCharacter>, sqlx::Error>;

    /// Bulk-insert movies with External provenance. All-or-nothing.
    async fn insert_movies(&self, movies: &[NewMovie]) -> Result<Vec<CreatedMovie>, sqlx::Error>;

    /// Replace a movie's association set with exactly the given ids.
    async fn replace_movie_characters(
        &self,
        movie_id: DbId,
        character_ids: &[DbId],
    ) -> Result<(), sqlx::Error>;
}

/// Postgres-backed [`SyncStore`] delegating to the repositories.
#[derive(Clone)]
pub struct PgSyncStore {
    pool: DbPool,
}

impl PgSyncStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl SyncStore for PgSyncStore {
    async fn purge_external(&self) -> Result<(u64, u64), sqlx::Error> {
        // Characters first, then movies; the FK cascade tears down link
        // rows with whichever side goes first.
        let characters = CharacterRepo::delete_by_provenance(&self.pool, Provenance::External).await?;
        let movies = MovieRepo::delete_by_provenance(&self.pool, Provenance::External).await?;
        Ok((characters, movies))
    }

    async fn insert_characters(
        &self,
        characters: &[NewCharacter],
    ) -> Result<Vec<CreatedCharacter>, sqlx::Error> {
        CharacterRepo::insert_external(&self.pool, characters).await
    }

    async fn insert_movies(&self, movies: &[NewMovie]) -> Result<Vec<CreatedMovie>, sqlx::Error> {
        MovieRepo::insert_external(&self.pool, movies).await
    }

    async fn replace_movie_characters(
        &self,
        movie_id: DbId,
        character_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        MovieRepo::replace_characters(&self.pool, movie_id, character_ids).await
    }
}
