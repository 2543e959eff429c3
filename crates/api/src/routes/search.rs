//! Route definitions for `/search`.

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Routes mounted at `/search`.
///
/// ```text
/// GET /                    -> search_all
/// GET /{category}/{value}  -> search_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search::search_all))
        .route("/{category}/{value}", get(search::search_by_category))
}
