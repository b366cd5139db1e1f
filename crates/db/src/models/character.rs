//! Character entity model.

use holocron_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::provenance::Provenance;

/// A character row from the `characters` table.
///
/// Physical attributes are all optional; the upstream serves them as
/// strings and unparseable values are stored as NULL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub provenance: Provenance,
    /// Upstream catalog identifier; unique among external rows.
    pub external_ref: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A character plus its associated movie ids, served by the detail
/// endpoint.
#[derive(Debug, Serialize)]
pub struct CharacterDetail {
    #[serde(flatten)]
    pub character: Character,
    pub movie_ids: Vec<DbId>,
}
