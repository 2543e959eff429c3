//! Handlers for `/movies`.

use axum::extract::{Path, State};
use axum::Json;
use cinedex_core::catalog::detail::compose_movie;
use cinedex_core::catalog::model::{MovieDetail, MovieSummary};
use cinedex_core::search::POPULAR_MOVIES_LIMIT;
use cinedex_core::types::DbId;
use cinedex_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::posters::MovieCard;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/movies/popular
///
/// The landing-page selection. A failed query yields an empty list.
pub async fn popular(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MovieCard>>>> {
    let popular = MovieRepo::list_popular(&state.pool, POPULAR_MOVIES_LIMIT).await;
    let movies: Vec<MovieSummary> = match popular {
        Ok(rows) => rows.into_iter().map(Into::into).collect(),
        Err(err) => {
            tracing::warn!(error = %err, "Popular movies query failed, returning empty list");
            Vec::new()
        }
    };

    Ok(Json(DataResponse {
        data: state.posters.enrich(movies).await,
    }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MovieDetail>>> {
    let detail = compose_movie(&state.catalog, id).await?;
    Ok(Json(DataResponse { data: detail }))
}
