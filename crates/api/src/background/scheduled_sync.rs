//! Scheduled catalog sync.
//!
//! Spawns a background task that invokes the same sync run the manual
//! trigger uses, on a fixed interval via `tokio::time::interval`. The
//! first tick fires immediately, so a fresh deployment populates its
//! catalog on boot.

use std::time::Duration;

use holocron_sync::{SyncCoordinator, SyncError};
use tokio_util::sync::CancellationToken;

/// Run the scheduled sync loop until `cancel` is triggered.
///
/// A tick that finds a run already active logs a warning and waits for
/// the next interval; it carries no extra semantics over the manual
/// trigger. Failures are logged and the loop keeps going -- retry is
/// simply the next tick.
pub async fn run(sync: SyncCoordinator, interval_secs: u64, cancel: CancellationToken) {
    tracing::info!(interval_secs, "Scheduled sync job started");

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Scheduled sync job stopping");
                break;
            }
            _ = interval.tick() => {
                match sync.run().await {
                    Ok(report) => {
                        tracing::info!(?report, "Scheduled catalog sync succeeded");
                    }
                    Err(SyncError::AlreadyRunning) => {
                        tracing::warn!("Scheduled catalog sync skipped: a run is already active");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Scheduled catalog sync failed");
                    }
                }
            }
        }
    }
}
