//! Error taxonomy shared by the catalog components and the HTTP layer.
//!
//! Each variant maps to exactly one HTTP status in the `api` crate.

use crate::catalog::CatalogError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A movie, actor, director or user id that resolves to nothing.
    #[error("{entity} not found with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed input: a bad category, a short password, a bad email.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Registration collided with an existing name, username or email.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing, expired or forged credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Credentials were valid but the account is locked or deactivated.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A failed catalog query is never the client's fault.
impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        CoreError::Internal(err.to_string())
    }
}
