//! Handlers for `/search`.

use axum::extract::{Path, Query, State};
use axum::Json;
use cinedex_core::catalog::model::PersonSummary;
use cinedex_core::catalog::search::{search, CategoryFilter, SearchRequest, SearchResults};
use cinedex_core::search::{Category, ResultList};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::posters::MovieCard;
use crate::query::{CategoryPageParams, SearchParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Search results with posters attached to the movie rows.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub to_search: Option<String>,
    pub filter: Option<CategoryFilter>,
    pub movies: ResultList<MovieCard>,
    pub actors: ResultList<PersonSummary>,
    pub directors: ResultList<PersonSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
}

/// GET /api/v1/search?q=&movies_page=&actors_page=&directors_page=&page_size=
///
/// Always 200: failed sub-searches come back as empty lists.
pub async fn search_all(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<SearchResponse>>> {
    let request = SearchRequest {
        term: params.q.clone(),
        filter: None,
        pagination: params.pagination(),
    };

    let results = search(&state.catalog, &request).await;
    Ok(Json(DataResponse {
        data: attach_posters(&state, results).await,
    }))
}

/// GET /api/v1/search/{category}/{value}?page=&page_size=
///
/// `category` is `genre`, `country` or `language` (Spanish aliases accepted).
pub async fn search_by_category(
    State(state): State<AppState>,
    Path((category, value)): Path<(String, String)>,
    Query(params): Query<CategoryPageParams>,
) -> AppResult<Json<DataResponse<SearchResponse>>> {
    let category = Category::from_str_value(&category).map_err(AppError::BadRequest)?;

    let request = SearchRequest {
        term: String::new(),
        filter: Some(CategoryFilter { category, value }),
        pagination: params.pagination(),
    };

    let results = search(&state.catalog, &request).await;
    Ok(Json(DataResponse {
        data: attach_posters(&state, results).await,
    }))
}

async fn attach_posters(state: &AppState, results: SearchResults) -> SearchResponse {
    let ResultList {
        rows,
        total_count,
        total_pages,
        current_page,
    } = results.movies;

    SearchResponse {
        to_search: results.to_search,
        filter: results.filter,
        movies: ResultList {
            rows: state.posters.enrich(rows).await,
            total_count,
            total_pages,
            current_page,
        },
        actors: results.actors,
        directors: results.directors,
        current_page: results.current_page,
    }
}
