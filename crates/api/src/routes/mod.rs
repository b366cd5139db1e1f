pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// GET  /movies            -> list
/// GET  /movies/{id}       -> get_by_id (with character ids)
/// GET  /characters        -> list
/// GET  /characters/{id}   -> get_by_id (with movie ids)
/// POST /sync              -> trigger a catalog sync run
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::movie::list))
        .route("/movies/{id}", get(handlers::movie::get_by_id))
        .route("/characters", get(handlers::character::list))
        .route("/characters/{id}", get(handlers::character::get_by_id))
        .route("/sync", post(handlers::sync::trigger))
}
