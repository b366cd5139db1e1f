//! Mapping and admission of upstream catalog records.
//!
//! Films pass through an admission policy before insertion: a film with
//! no title or an unparseable release date is skipped, not failed, so a
//! handful of dirty upstream rows cannot abort a whole sync run. People
//! have no admission policy; every fetched person maps to a character.

use chrono::NaiveDate;

use crate::catalog::{CatalogFilm, CatalogPerson};

/// An admitted movie, ready for bulk insert with External provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub episode_id: Option<i32>,
    pub opening_crawl: Option<String>,
    pub director: Option<String>,
    pub producer: Option<String>,
    pub release_date: NaiveDate,
    pub external_ref: String,
}

/// A mapped character, ready for bulk insert with External provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCharacter {
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub external_ref: String,
}

/// Parse a catalog release date. The upstream uses ISO `YYYY-MM-DD`.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse an upstream numeric attribute.
///
/// The catalog serves numbers as strings, including thousands separators
/// (`"1,358"`) and placeholders (`"unknown"`, `"n/a"`). Unparseable
/// values become `None`.
fn parse_numeric(raw: Option<&str>) -> Option<i32> {
    raw?.replace(',', "").parse().ok()
}

/// Apply the movie admission policy to a raw film.
///
/// Returns `None` (skip) when the title is absent or empty, or when the
/// release date is missing or not a valid calendar date. Otherwise
/// carries over the fields the local model keeps.
pub fn admit_film(film: &CatalogFilm) -> Option<NewMovie> {
    let title = film.title.as_deref().filter(|t| !t.is_empty())?;
    let release_date = parse_release_date(film.release_date.as_deref()?)?;

    Some(NewMovie {
        title: title.to_string(),
        episode_id: film.episode_id,
        opening_crawl: film.opening_crawl.clone(),
        director: film.director.clone(),
        producer: film.producer.clone(),
        release_date,
        external_ref: film.url.clone(),
    })
}

/// Map a raw person to a local character record.
///
/// A person with no name gets an empty string; the upstream has never
/// served one, but the local column is NOT NULL so the mapping must
/// produce something.
pub fn map_person(person: &CatalogPerson) -> NewCharacter {
    NewCharacter {
        name: person.name.clone().unwrap_or_default(),
        height: parse_numeric(person.height.as_deref()),
        mass: parse_numeric(person.mass.as_deref()),
        hair_color: person.hair_color.clone(),
        skin_color: person.skin_color.clone(),
        eye_color: person.eye_color.clone(),
        birth_year: person.birth_year.clone(),
        gender: person.gender.clone(),
        external_ref: person.url.clone(),
    }
}
