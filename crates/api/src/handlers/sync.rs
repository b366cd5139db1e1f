//! Manual trigger for the catalog sync.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Response payload for an accepted sync trigger.
#[derive(Serialize)]
pub struct SyncStartedResponse {
    pub status: &'static str,
}

/// POST /api/v1/sync
///
/// Fire-and-forget: the single-flight slot is claimed synchronously so
/// "already running" comes back as a 409 before anything is spawned,
/// then the run proceeds in the background and the handler returns 202.
/// The run's terminal result lands in the logs, not in this response.
pub async fn trigger(State(state): State<AppState>) -> AppResult<(StatusCode, Json<SyncStartedResponse>)> {
    let run = state.sync.begin()?;
    tracing::info!("Manual catalog sync triggered");

    tokio::spawn(async move {
        match run.execute().await {
            Ok(report) => tracing::info!(?report, "Manual catalog sync succeeded"),
            Err(e) => tracing::error!(error = %e, "Manual catalog sync failed"),
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(SyncStartedResponse { status: "started" }),
    ))
}
