pub mod drill;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// All versioned API routes, mounted at `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/drills", drill::router())
}
