//! Route definitions for catalog sites.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sites;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// POST   /submit       -> submit
/// GET    /sites        -> list
/// GET    /sites/{id}   -> get_by_id
/// GET    /random       -> random
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(sites::submit))
        .route("/sites", get(sites::list))
        .route("/sites/{id}", get(sites::get_by_id))
        .route("/random", get(sites::random))
}
