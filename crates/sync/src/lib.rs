//! Catalog synchronization engine.
//!
//! One sync run replaces the local copy of externally sourced movies and
//! characters with freshly fetched upstream data and rebuilds the
//! movie/character associations by matching external references. Runs
//! are single-flight per process: a second run requested while one is
//! live fails fast with [`SyncError::AlreadyRunning`].

mod coordinator;
mod error;
mod store;

pub use coordinator::{SyncCoordinator, SyncReport, SyncRun};
pub use error::SyncError;
pub use store::{PgSyncStore, SyncStore};
