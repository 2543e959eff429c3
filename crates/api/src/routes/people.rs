use axum::routing::get;
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// Person detail routes, merged at the `/api/v1` root.
///
/// ```text
/// GET /actors/{id}    -> get_actor
/// GET /directors/{id} -> get_director
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actors/{id}", get(people::get_actor))
        .route("/directors/{id}", get(people::get_director))
}
