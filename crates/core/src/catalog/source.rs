//! Storage seam for the catalog components.
//!
//! Defines [`CatalogSource`], the query executor the search aggregator and
//! detail composer run against. The production implementation lives in the
//! `db` crate; tests use in-memory fakes.

use std::future::Future;

use super::model::{
    ActorCredit, DirectedMovie, MovieCreditRow, MovieSummary, PersonRole, PersonSummary,
};
use crate::search::Category;
use crate::types::DbId;

/// Failure reported by a [`CatalogSource`].
///
/// Connection failures, bad SQL and constraint violations are not told
/// apart: callers either degrade or abort.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog query failed: {0}")]
    Query(String),
}

/// Read-only access to the movie catalog.
///
/// Candidate methods may return rows that only loosely match; ranking,
/// de-duplication and pagination are applied by the caller.
pub trait CatalogSource: Send + Sync {
    /// Movies whose title contains `term`, or whose overview or tagline
    /// contains `term` as a space-delimited word. An empty term matches
    /// every movie.
    fn movie_candidates(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, CatalogError>> + Send;

    /// People holding at least one credit qualifying for `role` whose name
    /// contains `term`.
    fn people_candidates(
        &self,
        term: &str,
        role: PersonRole,
    ) -> impl Future<Output = Result<Vec<PersonSummary>, CatalogError>> + Send;

    /// Movies linked to the named genre, country or language
    /// (case-insensitive exact name match).
    fn movies_in_category(
        &self,
        category: Category,
        value: &str,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, CatalogError>> + Send;

    /// Rows of the composed detail query for one movie. Empty when the
    /// movie does not exist.
    fn movie_detail_rows(
        &self,
        movie_id: DbId,
    ) -> impl Future<Output = Result<Vec<MovieCreditRow>, CatalogError>> + Send;

    /// Name of a person, or `None` when the id is unknown.
    fn person_name(
        &self,
        person_id: DbId,
    ) -> impl Future<Output = Result<Option<String>, CatalogError>> + Send;

    /// Cast credits with a character name, newest release first.
    fn actor_credits(
        &self,
        person_id: DbId,
    ) -> impl Future<Output = Result<Vec<ActorCredit>, CatalogError>> + Send;

    /// Distinct movies with a director-like crew credit, newest release first.
    fn directed_movies(
        &self,
        person_id: DbId,
    ) -> impl Future<Output = Result<Vec<DirectedMovie>, CatalogError>> + Send;
}
