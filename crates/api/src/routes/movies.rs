//! Route definitions for `/movies`.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET /popular -> popular
/// GET /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/popular", get(movies::popular))
        .route("/{id}", get(movies::get_by_id))
}
