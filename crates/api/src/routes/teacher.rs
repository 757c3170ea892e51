//! Route definitions for the `/teachers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::teacher;
use crate::state::AppState;

/// Routes mounted at `/teachers`.
///
/// ```text
/// GET    /        -> list_all
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(teacher::list_all).post(teacher::create))
        .route(
            "/{id}",
            get(teacher::get_by_id)
                .put(teacher::update)
                .delete(teacher::delete),
        )
}
