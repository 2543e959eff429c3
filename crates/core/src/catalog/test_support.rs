//! In-memory [`CatalogSource`] for unit tests.

use std::collections::HashSet;

use super::model::{
    ActorCredit, DirectedMovie, MovieCreditRow, MovieSummary, PersonRole, PersonSummary,
};
use super::source::{CatalogError, CatalogSource};
use crate::search::Category;
use crate::types::DbId;

pub(crate) fn movie(id: DbId, title: &str, overview: Option<&str>) -> MovieSummary {
    MovieSummary {
        id,
        title: title.to_string(),
        tagline: None,
        overview: overview.map(str::to_string),
        release_date: None,
        popularity: None,
    }
}

pub(crate) fn person(id: DbId, name: &str) -> PersonSummary {
    PersonSummary {
        id,
        name: name.to_string(),
    }
}

/// Fake store. Candidate methods return every stored row; the ranking code
/// is responsible for filtering. Operations named in `failing` error out.
#[derive(Default)]
pub(crate) struct FakeCatalog {
    pub movies: Vec<MovieSummary>,
    pub actors: Vec<PersonSummary>,
    pub directors: Vec<PersonSummary>,
    pub categories: Vec<(Category, String, MovieSummary)>,
    pub detail_rows: Vec<MovieCreditRow>,
    pub people: Vec<(DbId, String)>,
    pub actor_credits: Vec<(DbId, ActorCredit)>,
    pub directed: Vec<(DbId, DirectedMovie)>,
    pub failing: HashSet<&'static str>,
}

impl FakeCatalog {
    fn check(&self, operation: &'static str) -> Result<(), CatalogError> {
        if self.failing.contains(operation) {
            Err(CatalogError::Query(format!("{operation} unavailable")))
        } else {
            Ok(())
        }
    }
}

impl CatalogSource for FakeCatalog {
    async fn movie_candidates(&self, _term: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        self.check("movie_candidates")?;
        Ok(self.movies.clone())
    }

    async fn people_candidates(
        &self,
        _term: &str,
        role: PersonRole,
    ) -> Result<Vec<PersonSummary>, CatalogError> {
        self.check("people_candidates")?;
        Ok(match role {
            PersonRole::Actor => self.actors.clone(),
            PersonRole::Director => self.directors.clone(),
        })
    }

    async fn movies_in_category(
        &self,
        category: Category,
        value: &str,
    ) -> Result<Vec<MovieSummary>, CatalogError> {
        self.check("movies_in_category")?;
        Ok(self
            .categories
            .iter()
            .filter(|(c, v, _)| *c == category && v.eq_ignore_ascii_case(value))
            .map(|(_, _, m)| m.clone())
            .collect())
    }

    async fn movie_detail_rows(&self, movie_id: DbId) -> Result<Vec<MovieCreditRow>, CatalogError> {
        self.check("movie_detail_rows")?;
        Ok(self
            .detail_rows
            .iter()
            .filter(|row| row.id == movie_id)
            .cloned()
            .collect())
    }

    async fn person_name(&self, person_id: DbId) -> Result<Option<String>, CatalogError> {
        self.check("person_name")?;
        Ok(self
            .people
            .iter()
            .find(|(id, _)| *id == person_id)
            .map(|(_, name)| name.clone()))
    }

    async fn actor_credits(&self, person_id: DbId) -> Result<Vec<ActorCredit>, CatalogError> {
        self.check("actor_credits")?;
        Ok(self
            .actor_credits
            .iter()
            .filter(|(id, _)| *id == person_id)
            .map(|(_, credit)| credit.clone())
            .collect())
    }

    async fn directed_movies(&self, person_id: DbId) -> Result<Vec<DirectedMovie>, CatalogError> {
        self.check("directed_movies")?;
        Ok(self
            .directed
            .iter()
            .filter(|(id, _)| *id == person_id)
            .map(|(_, movie)| movie.clone())
            .collect())
    }
}
