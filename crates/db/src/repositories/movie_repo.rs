//! Repository for the `movies` table and the `movie_characters` join
//! table.

use holocron_core::ingest::NewMovie;
use holocron_core::reconcile::CreatedMovie;
use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::Movie;
use crate::models::provenance::Provenance;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, episode_id, story_line, opening_crawl, director, producer, \
     release_date, provenance, external_ref, created_at, updated_at";

/// Read paths plus the sync-specific bulk operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Bulk-insert externally sourced movies in one statement.
    ///
    /// A single multi-row INSERT, so any failing row aborts the whole
    /// batch with nothing committed. Returns the created ids paired
    /// with their external references for the reconciliation step.
    /// An empty slice is a no-op returning an empty vec.
    pub async fn insert_external(
        pool: &PgPool,
        movies: &[NewMovie],
    ) -> Result<Vec<CreatedMovie>, sqlx::Error> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
        let episode_ids: Vec<Option<i32>> = movies.iter().map(|m| m.episode_id).collect();
        let opening_crawls: Vec<Option<&str>> = movies
            .iter()
            .map(|m| m.opening_crawl.as_deref())
            .collect();
        let directors: Vec<Option<&str>> = movies.iter().map(|m| m.director.as_deref()).collect();
        let producers: Vec<Option<&str>> = movies.iter().map(|m| m.producer.as_deref()).collect();
        let release_dates: Vec<chrono::NaiveDate> =
            movies.iter().map(|m| m.release_date).collect();
        let external_refs: Vec<&str> = movies.iter().map(|m| m.external_ref.as_str()).collect();

        let rows = sqlx::query_as::<_, (DbId, String)>(
            "INSERT INTO movies
                (title, episode_id, opening_crawl, director, producer,
                 release_date, provenance, external_ref)
             SELECT t, e, o, d, p, r, 'external', x
             FROM UNNEST($1::text[], $2::int4[], $3::text[], $4::text[],
                         $5::text[], $6::date[], $7::text[])
                  AS u(t, e, o, d, p, r, x)
             RETURNING id, external_ref",
        )
        .bind(&titles)
        .bind(&episode_ids)
        .bind(&opening_crawls)
        .bind(&directors)
        .bind(&producers)
        .bind(&release_dates)
        .bind(&external_refs)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, external_ref)| CreatedMovie { id, external_ref })
            .collect())
    }

    /// Delete every movie with the given provenance, returning the row
    /// count. Link rows go with them via `ON DELETE CASCADE`; zero
    /// matching rows is a no-op.
    pub async fn delete_by_provenance(
        pool: &PgPool,
        provenance: Provenance,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE provenance = $1")
            .bind(provenance)
            .execute(pool)
            .await?;
        tracing::debug!(rows = result.rows_affected(), %provenance, "Purged movies");
        Ok(result.rows_affected())
    }

    /// Atomically replace a movie's association set.
    ///
    /// Drops all existing links for the movie and inserts exactly the
    /// given set in one transaction. Idempotent; the empty set simply
    /// clears the movie's links.
    pub async fn replace_characters(
        pool: &PgPool,
        movie_id: DbId,
        character_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM movie_characters WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *tx)
            .await?;

        if !character_ids.is_empty() {
            sqlx::query(
                "INSERT INTO movie_characters (movie_id, character_id)
                 SELECT $1, c FROM UNNEST($2::int8[]) AS u(c)
                 ON CONFLICT DO NOTHING",
            )
            .bind(movie_id)
            .bind(character_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }

    /// List all movies, release order first, then stable by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies
             ORDER BY release_date ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The character ids associated with a movie, ascending.
    pub async fn character_ids(pool: &PgPool, movie_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT character_id FROM movie_characters
             WHERE movie_id = $1 ORDER BY character_id ASC",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Count movies with the given provenance.
    pub async fn count_by_provenance(
        pool: &PgPool,
        provenance: Provenance,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies WHERE provenance = $1")
            .bind(provenance)
            .fetch_one(pool)
            .await
    }
}
