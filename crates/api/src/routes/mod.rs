pub mod health;
pub mod teacher;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /teachers            list, create
/// /teachers/{id}       get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/teachers", teacher::router())
}
