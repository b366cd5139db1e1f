//! Upstream catalog contract.
//!
//! The catalog serves two collections, films and people, each as a
//! paginated-shaped envelope with a flattened result list. Records are
//! keyed by an opaque `url` that also acts as the join key between the
//! two collections: a film's `characters` list holds people urls.
//!
//! Upstream data is not guaranteed clean, so every field the sync does
//! not strictly require is optional and deserialization is lenient
//! (missing fields become `None` / empty rather than decode errors).

use serde::{Deserialize, Serialize};

/// A raw film record as served by the upstream catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFilm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub episode_id: Option<i32>,
    #[serde(default)]
    pub opening_crawl: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub producer: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// People urls referenced by this film.
    #[serde(default)]
    pub characters: Vec<String>,
    /// Opaque upstream identifier; the external reference locally.
    pub url: String,
}

/// A raw person record as served by the upstream catalog.
///
/// Numeric attributes arrive as strings (`"172"`, `"unknown"`,
/// `"1,358"`); parsing happens in [`crate::ingest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub mass: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub skin_color: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Opaque upstream identifier; the external reference locally.
    pub url: String,
}

/// Response envelope for both catalog collections.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// Errors from the upstream catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog returned status {0}")]
    Status(u16),

    #[error("failed to decode catalog response: {0}")]
    Decode(String),
}

/// Read access to the upstream catalog.
///
/// Implemented over HTTP by `holocron-catalog`; sync tests substitute a
/// scriptable mock. Both fetches return the full flattened list; any
/// transport or decode failure is run-fatal for the caller.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_films(&self) -> Result<Vec<CatalogFilm>, CatalogError>;

    async fn fetch_people(&self) -> Result<Vec<CatalogPerson>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_envelope_decodes() {
        let json = r#"{
            "count": 1,
            "results": [{
                "title": "A New Hope",
                "episode_id": 4,
                "opening_crawl": "It is a period of civil war.",
                "director": "George Lucas",
                "producer": "Gary Kurtz, Rick McCallum",
                "release_date": "1977-05-25",
                "characters": ["https://swapi.dev/api/people/1/"],
                "url": "https://swapi.dev/api/films/1/"
            }]
        }"#;
        let page: CatalogPage<CatalogFilm> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, Some(1));
        assert_eq!(page.results.len(), 1);
        let film = &page.results[0];
        assert_eq!(film.title.as_deref(), Some("A New Hope"));
        assert_eq!(film.characters.len(), 1);
    }

    #[test]
    fn missing_optional_fields_decode_as_none() {
        let json = r#"{ "results": [{ "url": "https://swapi.dev/api/films/9/" }] }"#;
        let page: CatalogPage<CatalogFilm> = serde_json::from_str(json).unwrap();
        let film = &page.results[0];
        assert!(film.title.is_none());
        assert!(film.release_date.is_none());
        assert!(film.characters.is_empty());
    }

    #[test]
    fn person_decodes_with_string_numerics() {
        let json = r#"{
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "birth_year": "19BBY",
            "url": "https://swapi.dev/api/people/1/"
        }"#;
        let person: CatalogPerson = serde_json::from_str(json).unwrap();
        assert_eq!(person.height.as_deref(), Some("172"));
        assert!(person.gender.is_none());
    }

    #[test]
    fn record_without_url_is_a_decode_error() {
        let json = r#"{ "title": "A New Hope" }"#;
        assert!(serde_json::from_str::<CatalogFilm>(json).is_err());
    }
}
