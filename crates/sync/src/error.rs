use holocron_core::catalog::CatalogError;

/// Failure taxonomy for one sync run.
///
/// `AlreadyRunning` is surfaced to callers as a conflict, distinct from
/// real failures; `Upstream` and `Persistence` are run-fatal and the
/// HTTP layer collapses them into a generic internal error, keeping the
/// diagnostic detail in the logs.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("a catalog sync is already running")]
    AlreadyRunning,

    #[error("catalog fetch failed: {0}")]
    Upstream(#[from] CatalogError),

    #[error("storage operation failed: {0}")]
    Persistence(#[from] sqlx::Error),
}
