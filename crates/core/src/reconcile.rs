//! Relationship reconciliation for freshly synced catalog data.
//!
//! After a sync run bulk-inserts movies and characters, the upstream
//! character-reference lists still name people by catalog url. This
//! module resolves those urls to local character ids and produces the
//! exact association set each movie should end up with. It is pure so
//! the matching step is testable without a database or a network.
//!
//! The raw film records are carried through from the fetch rather than
//! re-requested; each created movie finds its originating film by
//! external reference.

use std::collections::{BTreeSet, HashMap};

use crate::catalog::CatalogFilm;
use crate::types::DbId;

/// A movie row created by the current sync run.
#[derive(Debug, Clone)]
pub struct CreatedMovie {
    pub id: DbId,
    pub external_ref: String,
}

/// A character row created by the current sync run.
#[derive(Debug, Clone)]
pub struct CreatedCharacter {
    pub id: DbId,
    pub external_ref: String,
}

/// The resolved association set for one movie.
///
/// `character_ids` is sorted and de-duplicated: upstream reference lists
/// are treated as sets, and association pairs are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieAssociations {
    pub movie_id: DbId,
    pub character_ids: Vec<DbId>,
}

/// Resolve upstream character references into local association sets.
///
/// For every created movie whose originating film lists at least one
/// character reference, returns the set of local character ids those
/// references resolve to. References with no local match are dropped
/// silently (the upstream may reference people outside the fetched
/// collection), so a resolved set may be empty; the caller still
/// replaces the movie's links with that empty set. Movies whose film
/// lists no references produce no entry.
///
/// Runs in O(M + C) over the created movies and characters.
pub fn resolve_associations(
    movies: &[CreatedMovie],
    characters: &[CreatedCharacter],
    films: &[CatalogFilm],
) -> Vec<MovieAssociations> {
    let character_by_ref: HashMap<&str, DbId> = characters
        .iter()
        .map(|c| (c.external_ref.as_str(), c.id))
        .collect();

    let film_by_ref: HashMap<&str, &CatalogFilm> =
        films.iter().map(|f| (f.url.as_str(), f)).collect();

    movies
        .iter()
        .filter_map(|movie| {
            let film = film_by_ref.get(movie.external_ref.as_str())?;
            if film.characters.is_empty() {
                return None;
            }

            let resolved: BTreeSet<DbId> = film
                .characters
                .iter()
                .filter_map(|r| character_by_ref.get(r.as_str()).copied())
                .collect();

            Some(MovieAssociations {
                movie_id: movie.id,
                character_ids: resolved.into_iter().collect(),
            })
        })
        .collect()
}
