//! PostgreSQL implementation of [`CatalogSource`].

use cinedex_core::catalog::model::{
    ActorCredit, DirectedMovie, MovieCreditRow, MovieSummary, PersonRole, PersonSummary,
};
use cinedex_core::catalog::{CatalogError, CatalogSource};
use cinedex_core::search::{Category, DIRECTOR_JOB_PATTERN};
use cinedex_core::types::DbId;

use crate::repositories::{MovieRepo, PersonRepo};
use crate::DbPool;

/// Catalog queries backed by the shared connection pool.
#[derive(Debug, Clone)]
pub struct PgCatalog {
    pool: DbPool,
}

impl PgCatalog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Keeps the full `sqlx` error in the debug log; callers only see the message.
fn query_failed(err: sqlx::Error) -> CatalogError {
    tracing::debug!(error = ?err, "Catalog query failed");
    CatalogError::Query(err.to_string())
}

fn convert<R, T: From<R>>(rows: Vec<R>) -> Vec<T> {
    rows.into_iter().map(T::from).collect()
}

impl CatalogSource for PgCatalog {
    async fn movie_candidates(&self, term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        MovieRepo::search_candidates(&self.pool, term)
            .await
            .map(convert)
            .map_err(query_failed)
    }

    async fn people_candidates(
        &self,
        term: &str,
        role: PersonRole,
    ) -> Result<Vec<PersonSummary>, CatalogError> {
        let rows = match role {
            PersonRole::Actor => PersonRepo::search_actors(&self.pool, term).await,
            PersonRole::Director => {
                PersonRepo::search_directors(&self.pool, term, DIRECTOR_JOB_PATTERN).await
            }
        };
        rows.map(convert).map_err(query_failed)
    }

    async fn movies_in_category(
        &self,
        category: Category,
        value: &str,
    ) -> Result<Vec<MovieSummary>, CatalogError> {
        MovieRepo::list_by_category(&self.pool, category, value)
            .await
            .map(convert)
            .map_err(query_failed)
    }

    async fn movie_detail_rows(&self, movie_id: DbId) -> Result<Vec<MovieCreditRow>, CatalogError> {
        MovieRepo::detail_rows(&self.pool, movie_id)
            .await
            .map(convert)
            .map_err(query_failed)
    }

    async fn person_name(&self, person_id: DbId) -> Result<Option<String>, CatalogError> {
        PersonRepo::find_name(&self.pool, person_id)
            .await
            .map_err(query_failed)
    }

    async fn actor_credits(&self, person_id: DbId) -> Result<Vec<ActorCredit>, CatalogError> {
        PersonRepo::actor_credits(&self.pool, person_id)
            .await
            .map(convert)
            .map_err(query_failed)
    }

    async fn directed_movies(&self, person_id: DbId) -> Result<Vec<DirectedMovie>, CatalogError> {
        MovieRepo::directed_by(&self.pool, person_id, DIRECTOR_JOB_PATTERN)
            .await
            .map(convert)
            .map_err(query_failed)
    }
}
