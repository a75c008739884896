pub mod health;
pub mod sites;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /submit                 submit a site for review (POST)
/// /sites                  list approved sites (GET, ?page=&limit=)
/// /sites/{id}             get one site (GET)
/// /random                 random approved site (GET, ?category=&year=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(sites::router())
}
