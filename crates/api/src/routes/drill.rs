//! Route definitions for the `/drills` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::drill;
use crate::state::AppState;

/// Routes mounted at `/drills`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> show
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(drill::list).post(drill::create))
        .route(
            "/{id}",
            get(drill::show).patch(drill::update).delete(drill::delete),
        )
}
