use std::sync::Arc;

use cinedex_db::catalog::PgCatalog;

use crate::config::ServerConfig;
use crate::posters::PosterClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the account handlers.
    pub pool: cinedex_db::DbPool,
    /// Catalog queries over the same pool, used by search and detail pages.
    pub catalog: PgCatalog,
    pub config: Arc<ServerConfig>,
    pub posters: Arc<PosterClient>,
}

impl AppState {
    pub fn new(pool: cinedex_db::DbPool, config: ServerConfig) -> Self {
        let posters = PosterClient::new(config.posters.clone());
        Self {
            catalog: PgCatalog::new(pool.clone()),
            pool,
            config: Arc::new(config),
            posters: Arc::new(posters),
        }
    }
}
