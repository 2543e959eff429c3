//! Repository for the `person` table and its credits.

use cinedex_core::search::contains_pattern;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::person::{ActorCreditRow, PersonRow};

/// Provides read queries over people and their cast credits.
pub struct PersonRepo;

impl PersonRepo {
    /// Find a person's name by ID.
    pub async fn find_name(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT person_name FROM person WHERE person_id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// People whose name contains `term` and who hold at least one cast
    /// credit with a character name.
    pub async fn search_actors(pool: &PgPool, term: &str) -> Result<Vec<PersonRow>, sqlx::Error> {
        sqlx::query_as::<_, PersonRow>(
            "SELECT p.person_id AS id, p.person_name AS name
             FROM person p
             WHERE p.person_name ILIKE $1
               AND EXISTS (
                   SELECT 1 FROM movie_cast mc
                   WHERE mc.person_id = p.person_id
                     AND mc.character_name IS NOT NULL
               )",
        )
        .bind(contains_pattern(term))
        .fetch_all(pool)
        .await
    }

    /// People whose name contains `term` and who hold at least one crew
    /// credit matching `job_pattern`.
    pub async fn search_directors(
        pool: &PgPool,
        term: &str,
        job_pattern: &str,
    ) -> Result<Vec<PersonRow>, sqlx::Error> {
        sqlx::query_as::<_, PersonRow>(
            "SELECT p.person_id AS id, p.person_name AS name
             FROM person p
             WHERE p.person_name ILIKE $1
               AND EXISTS (
                   SELECT 1 FROM movie_crew cr
                   WHERE cr.person_id = p.person_id
                     AND cr.job ILIKE $2
               )",
        )
        .bind(contains_pattern(term))
        .bind(job_pattern)
        .fetch_all(pool)
        .await
    }

    /// Cast credits with a character name, newest release first.
    pub async fn actor_credits(
        pool: &PgPool,
        person_id: DbId,
    ) -> Result<Vec<ActorCreditRow>, sqlx::Error> {
        sqlx::query_as::<_, ActorCreditRow>(
            "SELECT m.movie_id, m.title, m.release_date, mc.character_name, g.gender
             FROM movie_cast mc
             JOIN movie m ON m.movie_id = mc.movie_id
             LEFT JOIN gender g ON g.gender_id = mc.gender_id
             WHERE mc.person_id = $1
               AND mc.character_name IS NOT NULL
             ORDER BY m.release_date DESC NULLS LAST, m.title, mc.cast_order NULLS LAST",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await
    }
}
