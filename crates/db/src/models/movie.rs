//! Movie rows.

use cinedex_core::catalog::model::{DirectedMovie, MovieCreditRow, MovieSummary};
use cinedex_core::types::{DbId, ReleaseDate};
use sqlx::FromRow;

/// A movie as selected for search results and listings.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<ReleaseDate>,
    pub popularity: Option<f64>,
}

impl From<MovieRow> for MovieSummary {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            tagline: row.tagline,
            overview: row.overview,
            release_date: row.release_date,
            popularity: row.popularity,
        }
    }
}

/// One row of the composed movie detail query.
#[derive(Debug, Clone, FromRow)]
pub struct MovieDetailJoinRow {
    pub id: DbId,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<ReleaseDate>,
    pub actor_id: Option<DbId>,
    pub actor_name: Option<String>,
    pub character_name: Option<String>,
    pub cast_order: Option<i32>,
    pub crew_member_id: Option<DbId>,
    pub crew_member_name: Option<String>,
    pub department_name: Option<String>,
    pub job: Option<String>,
    pub genre_name: Option<String>,
    pub country_name: Option<String>,
    pub language_name: Option<String>,
    pub language_role: Option<String>,
    pub company_name: Option<String>,
}

impl From<MovieDetailJoinRow> for MovieCreditRow {
    fn from(row: MovieDetailJoinRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            tagline: row.tagline,
            overview: row.overview,
            release_date: row.release_date,
            actor_id: row.actor_id,
            actor_name: row.actor_name,
            character_name: row.character_name,
            cast_order: row.cast_order,
            crew_member_id: row.crew_member_id,
            crew_member_name: row.crew_member_name,
            department_name: row.department_name,
            job: row.job,
            genre_name: row.genre_name,
            country_name: row.country_name,
            language_name: row.language_name,
            language_role: row.language_role,
            company_name: row.company_name,
        }
    }
}

/// A movie credited to a director.
#[derive(Debug, Clone, FromRow)]
pub struct DirectedMovieRow {
    pub movie_id: DbId,
    pub title: String,
    pub release_date: Option<ReleaseDate>,
}

impl From<DirectedMovieRow> for DirectedMovie {
    fn from(row: DirectedMovieRow) -> Self {
        Self {
            movie_id: row.movie_id,
            title: row.title,
            release_date: row.release_date,
        }
    }
}
