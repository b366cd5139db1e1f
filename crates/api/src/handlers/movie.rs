//! Handlers for the `/movies` resource.
//!
//! Read-only: movies are either user-authored through paths outside this
//! service's scope or owned by the catalog sync, which is the only
//! writer of externally sourced rows.

use axum::extract::{Path, State};
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::movie::{Movie, MovieDetail};
use holocron_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieDetail>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id,
        }))?;
    let character_ids = MovieRepo::character_ids(&state.pool, id).await?;
    Ok(Json(MovieDetail {
        movie,
        character_ids,
    }))
}
