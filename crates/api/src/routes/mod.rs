pub mod character;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters                                      list, create
/// /characters/{id}                                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/characters", character::router())
}
