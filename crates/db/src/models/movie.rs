//! Movie entity model.

use chrono::NaiveDate;
use holocron_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::provenance::Provenance;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub episode_id: Option<i32>,
    /// User-authored synopsis; never set by sync.
    pub story_line: Option<String>,
    /// Upstream synopsis, populated by sync for external rows.
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub provenance: Provenance,
    /// Upstream catalog identifier; unique among external rows.
    pub external_ref: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie plus its associated character ids, served by the detail
/// endpoint.
#[derive(Debug, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: Movie,
    pub character_ids: Vec<DbId>,
}
