//! Catalog read models.
//!
//! Row shapes handed over by a [`CatalogSource`](super::CatalogSource) and
//! the view models the composers build from them.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, ReleaseDate};

// ---------------------------------------------------------------------------
// Summaries (search and listing rows)
// ---------------------------------------------------------------------------

/// A movie as it appears in search results and listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<ReleaseDate>,
    pub popularity: Option<f64>,
}

/// A person (actor or director) as it appears in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: DbId,
    pub name: String,
}

/// Which kind of credit qualifies a person for a people search or page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonRole {
    /// Holds a cast credit with a character name.
    Actor,
    /// Holds a crew credit whose job contains "director".
    Director,
}

impl PersonRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actor => "actor",
            Self::Director => "director",
        }
    }
}

// ---------------------------------------------------------------------------
// Movie detail
// ---------------------------------------------------------------------------

/// One row of the composed movie detail query.
///
/// Every row repeats the movie's scalar columns and fills at most one facet
/// group (cast, crew, genre, country, language, company); the other facet
/// columns are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieCreditRow {
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastMember {
    pub actor_id: DbId,
    pub actor_name: String,
    pub character_name: String,
    pub cast_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrewMember {
    pub crew_member_id: DbId,
    pub crew_member_name: String,
    pub department_name: String,
    pub job: String,
}

/// Fully composed movie page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetail {
    pub id: DbId,
    pub title: String,
    pub tagline: Option<String>,
    pub release_date: Option<ReleaseDate>,
    pub overview: Option<String>,
    pub directors: Vec<CrewMember>,
    pub writers: Vec<CrewMember>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub countries: Vec<String>,
    pub genres: Vec<String>,
    pub original_language: Option<String>,
    pub production_companies: Vec<String>,
}

// ---------------------------------------------------------------------------
// Person detail
// ---------------------------------------------------------------------------

/// A movie an actor played in, with the character played.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorCredit {
    pub movie_id: DbId,
    pub title: String,
    pub release_date: Option<ReleaseDate>,
    pub character_name: String,
    /// Gender label attached to the credit, if any.
    pub gender: Option<String>,
}

/// A movie a person directed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectedMovie {
    pub movie_id: DbId,
    pub title: String,
    pub release_date: Option<ReleaseDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorDetail {
    pub actor_name: String,
    pub actor_gender: String,
    pub movies: Vec<ActorCredit>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorDetail {
    pub director_name: String,
    pub movies: Vec<DirectedMovie>,
}

/// Person page for either role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PersonDetail {
    Actor(ActorDetail),
    Director(DirectorDetail),
}
