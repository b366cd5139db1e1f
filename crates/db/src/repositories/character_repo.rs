//! Repository for the `characters` table.

use holocron_core::ingest::NewCharacter;
use holocron_core::reconcile::CreatedCharacter;
use holocron_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::Character;
use crate::models::provenance::Provenance;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, height, mass, hair_color, skin_color, eye_color, birth_year, \
     gender, provenance, external_ref, created_at, updated_at";

/// Read paths plus the sync-specific bulk operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Bulk-insert externally sourced characters in one statement.
    ///
    /// A single multi-row INSERT, so any failing row aborts the whole
    /// batch with nothing committed. Returns the created ids paired
    /// with their external references for the reconciliation step.
    /// An empty slice is a no-op returning an empty vec.
    pub async fn insert_external(
        pool: &PgPool,
        characters: &[NewCharacter],
    ) -> Result<Vec<CreatedCharacter>, sqlx::Error> {
        if characters.is_empty() {
            return Ok(Vec::new());
        }

        let names: Vec<&str> = characters.iter().map(|c| c.name.as_str()).collect();
        let heights: Vec<Option<i32>> = characters.iter().map(|c| c.height).collect();
        let masses: Vec<Option<i32>> = characters.iter().map(|c| c.mass).collect();
        let hair_colors: Vec<Option<&str>> =
            characters.iter().map(|c| c.hair_color.as_deref()).collect();
        let skin_colors: Vec<Option<&str>> =
            characters.iter().map(|c| c.skin_color.as_deref()).collect();
        let eye_colors: Vec<Option<&str>> =
            characters.iter().map(|c| c.eye_color.as_deref()).collect();
        let birth_years: Vec<Option<&str>> =
            characters.iter().map(|c| c.birth_year.as_deref()).collect();
        let genders: Vec<Option<&str>> = characters.iter().map(|c| c.gender.as_deref()).collect();
        let external_refs: Vec<&str> = characters
            .iter()
            .map(|c| c.external_ref.as_str())
            .collect();

        let rows = sqlx::query_as::<_, (DbId, String)>(
            "INSERT INTO characters
                (name, height, mass, hair_color, skin_color, eye_color,
                 birth_year, gender, provenance, external_ref)
             SELECT n, h, m, hc, sc, ec, b, g, 'external', x
             FROM UNNEST($1::text[], $2::int4[], $3::int4[], $4::text[],
                         $5::text[], $6::text[], $7::text[], $8::text[],
                         $9::text[])
                  AS u(n, h, m, hc, sc, ec, b, g, x)
             RETURNING id, external_ref",
        )
        .bind(&names)
        .bind(&heights)
        .bind(&masses)
        .bind(&hair_colors)
        .bind(&skin_colors)
        .bind(&eye_colors)
        .bind(&birth_years)
        .bind(&genders)
        .bind(&external_refs)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, external_ref)| CreatedCharacter { id, external_ref })
            .collect())
    }

    /// Delete every character with the given provenance, returning the
    /// row count. Link rows go with them via `ON DELETE CASCADE`; zero
    /// matching rows is a no-op.
    pub async fn delete_by_provenance(
        pool: &PgPool,
        provenance: Provenance,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE provenance = $1")
            .bind(provenance)
            .execute(pool)
            .await?;
        tracing::debug!(rows = result.rows_affected(), %provenance, "Purged characters");
        Ok(result.rows_affected())
    }

    /// List all characters, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The movie ids associated with a character, ascending.
    pub async fn movie_ids(pool: &PgPool, character_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT movie_id FROM movie_characters
             WHERE character_id = $1 ORDER BY movie_id ASC",
        )
        .bind(character_id)
        .fetch_all(pool)
        .await
    }

    /// Count characters with the given provenance.
    pub async fn count_by_provenance(
        pool: &PgPool,
        provenance: Provenance,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters WHERE provenance = $1")
            .bind(provenance)
            .fetch_one(pool)
            .await
    }
}
