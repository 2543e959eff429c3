//! Handler for the navigation menus.

use axum::extract::State;
use axum::Json;
use cinedex_db::repositories::LookupRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Names offered in the genre, country and language menus.
#[derive(Debug, Serialize)]
pub struct NavbarResponse {
    pub genres: Vec<String>,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
}

fn names_or_empty(list: &'static str, result: Result<Vec<String>, sqlx::Error>) -> Vec<String> {
    result.unwrap_or_else(|err| {
        tracing::warn!(list, error = %err, "Lookup query failed, returning empty list");
        Vec::new()
    })
}

/// GET /api/v1/navbar
///
/// Each list degrades to empty on its own.
pub async fn navbar(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<NavbarResponse>>> {
    let (genres, countries, languages) = tokio::join!(
        LookupRepo::genre_names(&state.pool),
        LookupRepo::country_names(&state.pool),
        LookupRepo::language_names(&state.pool),
    );

    Ok(Json(DataResponse {
        data: NavbarResponse {
            genres: names_or_empty("genres", genres),
            countries: names_or_empty("countries", countries),
            languages: names_or_empty("languages", languages),
        },
    }))
}
