//! The sync coordinator: one end-to-end catalog replacement run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use holocron_core::catalog::CatalogClient;
use holocron_core::ingest::{self, NewMovie};
use holocron_core::reconcile;

use crate::error::SyncError;
use crate::store::SyncStore;

/// Counters for a completed sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub purged_characters: u64,
    pub purged_movies: u64,
    pub characters_created: usize,
    pub movies_created: usize,
    /// Upstream films rejected by the admission policy.
    pub movies_skipped: usize,
    /// Movies whose association set was replaced during reconciliation.
    pub movies_linked: usize,
}

/// Orchestrates catalog synchronization runs.
///
/// Holds the single-flight flag: at most one run may be active at a time
/// within this process. The flag is process-local only; horizontally
/// scaled deployments need a shared lease on top of this, which the
/// coordinator deliberately does not provide.
#[derive(Clone)]
pub struct SyncCoordinator {
    catalog: Arc<dyn CatalogClient>,
    store: Arc<dyn SyncStore>,
    running: Arc<AtomicBool>,
}

impl SyncCoordinator {
    pub fn new(catalog: Arc<dyn CatalogClient>, store: Arc<dyn SyncStore>) -> Self {
        Self {
            catalog,
            store,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a run is currently active.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Claim the single-flight slot and return the run handle.
    ///
    /// The check-and-set is one atomic compare-exchange, so two
    /// concurrent callers cannot both be admitted. Fails immediately
    /// with [`SyncError::AlreadyRunning`] when a run is live; callers
    /// are never queued. The returned [`SyncRun`] releases the slot
    /// when dropped, whether it executed or not.
    pub fn begin(&self) -> Result<SyncRun, SyncError> {
        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SyncError::AlreadyRunning);
        }

        Ok(SyncRun {
            catalog: Arc::clone(&self.catalog),
            store: Arc::clone(&self.store),
            _guard: RunGuard(Arc::clone(&self.running)),
        })
    }

    /// Run one full sync to its terminal result.
    pub async fn run(&self) -> Result<SyncReport, SyncError> {
        self.begin()?.execute().await
    }
}

/// Clears the running flag when the run ends for any reason, including
/// a panic mid-run, so a failed run never blocks the next one.
struct RunGuard(Arc<AtomicBool>);

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// An admitted, in-flight sync run.
pub struct SyncRun {
    catalog: Arc<dyn CatalogClient>,
    store: Arc<dyn SyncStore>,
    _guard: RunGuard,
}

impl std::fmt::Debug for SyncRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncRun").finish_non_exhaustive()
    }
}

impl SyncRun {
    /// Execute the run stages strictly in order: purge, ingest
    /// characters, ingest movies, reconcile relationships.
    ///
    /// Any stage failure aborts the remainder, is logged with stage
    /// context, and propagates; nothing is retried internally. Empty
    /// upstream collections are valid and produce zero inserts.
    pub async fn execute(self) -> Result<SyncReport, SyncError> {
        tracing::info!("Catalog sync started");

        let (purged_characters, purged_movies) = self
            .store
            .purge_external()
            .await
            .map_err(|e| stage_failed("purge", e))?;
        tracing::info!(purged_characters, purged_movies, "Purged external rows");

        let people = self
            .catalog
            .fetch_people()
            .await
            .map_err(|e| stage_failed("fetch_people", e))?;
        let new_characters: Vec<_> = people.iter().map(ingest::map_person).collect();
        let created_characters = self
            .store
            .insert_characters(&new_characters)
            .await
            .map_err(|e| stage_failed("ingest_characters", e))?;
        tracing::info!(count = created_characters.len(), "Characters ingested");

        let films = self
            .catalog
            .fetch_films()
            .await
            .map_err(|e| stage_failed("fetch_films", e))?;
        let admitted: Vec<NewMovie> = films.iter().filter_map(ingest::admit_film).collect();
        let movies_skipped = films.len() - admitted.len();
        let created_movies = self
            .store
            .insert_movies(&admitted)
            .await
            .map_err(|e| stage_failed("ingest_movies", e))?;
        tracing::info!(
            count = created_movies.len(),
            skipped = movies_skipped,
            "Movies ingested"
        );

        let associations =
            reconcile::resolve_associations(&created_movies, &created_characters, &films);
        for assoc in &associations {
            self.store
                .replace_movie_characters(assoc.movie_id, &assoc.character_ids)
                .await
                .map_err(|e| stage_failed("reconcile", e))?;
        }
        tracing::info!(movies_linked = associations.len(), "Relationships reconciled");

        let report = SyncReport {
            purged_characters,
            purged_movies,
            characters_created: created_characters.len(),
            movies_created: created_movies.len(),
            movies_skipped,
            movies_linked: associations.len(),
        };
        tracing::info!(?report, "Catalog sync finished");
        Ok(report)
    }
}

fn stage_failed(stage: &'static str, err: impl Into<SyncError>) -> SyncError {
    let err = err.into();
    tracing::error!(stage, error = %err, "Sync run failed");
    err
}
