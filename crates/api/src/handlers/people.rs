//! Handlers for `/actors` and `/directors`.

use axum::extract::{Path, State};
use axum::Json;
use cinedex_core::catalog::detail::{compose_actor, compose_director};
use cinedex_core::catalog::model::{ActorDetail, DirectorDetail};
use cinedex_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/actors/{id}
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ActorDetail>>> {
    let detail = compose_actor(&state.catalog, id).await?;
    tracing::debug!(actor_id = id, movies = detail.movies.len(), "Actor page composed");
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/directors/{id}
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<DirectorDetail>>> {
    let detail = compose_director(&state.catalog, id).await?;
    tracing::debug!(director_id = id, movies = detail.movies.len(), "Director page composed");
    Ok(Json(DataResponse { data: detail }))
}
