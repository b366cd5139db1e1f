//! Handlers for the `/characters` resource. Read-only, like `/movies`.

use axum::extract::{Path, State};
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::character::{Character, CharacterDetail};
use holocron_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/v1/characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterDetail>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    let movie_ids = CharacterRepo::movie_ids(&state.pool, id).await?;
    Ok(Json(CharacterDetail {
        character,
        movie_ids,
    }))
}
