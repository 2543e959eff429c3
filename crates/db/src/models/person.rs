//! Person rows.

use cinedex_core::catalog::model::{ActorCredit, PersonSummary};
use cinedex_core::types::{DbId, ReleaseDate};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PersonRow {
    pub id: DbId,
    pub name: String,
}

impl From<PersonRow> for PersonSummary {
    fn from(row: PersonRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// A cast credit joined with its movie and the recorded gender label.
#[derive(Debug, Clone, FromRow)]
pub struct ActorCreditRow {
    pub movie_id: DbId,
    pub title: String,
    pub release_date: Option<ReleaseDate>,
    pub character_name: String,
    pub gender: Option<String>,
}

impl From<ActorCreditRow> for ActorCredit {
    fn from(row: ActorCreditRow) -> Self {
        Self {
            movie_id: row.movie_id,
            title: row.title,
            release_date: row.release_date,
            character_name: row.character_name,
            gender: row.gender,
        }
    }
}
