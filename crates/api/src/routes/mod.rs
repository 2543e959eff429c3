pub mod auth;
pub mod health;
pub mod movies;
pub mod people;
pub mod search;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /search                          term search (movies, actors, directors)
/// /search/{category}/{value}       movies by genre, country or language
///
/// /movies/popular                  landing-page selection
/// /movies/{id}                     movie detail
///
/// /actors/{id}                     actor detail
/// /directors/{id}                  director detail
///
/// /navbar                          genre, country and language menus
///
/// /auth/register                   create account (public)
/// /auth/login                      login, sets the access cookie (public)
/// /auth/logout                     clear the access cookie
///
/// /profile                         current user (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/search", search::router())
        .nest("/movies", movies::router())
        .merge(people::router())
        .route("/navbar", get(handlers::lookups::navbar))
        .nest("/auth", auth::router())
        .route("/profile", get(handlers::profile::get_profile))
}
