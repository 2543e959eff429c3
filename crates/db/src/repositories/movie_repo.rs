//! Repository for the `movie` table and its facet joins.

use cinedex_core::search::{contains_pattern, exact_pattern, word_pattern, Category};
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{DirectedMovieRow, MovieDetailJoinRow, MovieRow};

/// Column list shared across listing queries. Assumes the `m` alias.
const COLUMNS: &str = "m.movie_id AS id, m.title, m.tagline, m.overview, \
                        m.release_date, m.popularity";

/// Facet rows for one movie, stacked with `UNION ALL` so a movie with
/// many cast and crew credits does not multiply its genre or company rows.
/// Each branch fills its own columns and leaves the rest `NULL`.
const DETAIL_QUERY: &str = "\
SELECT m.movie_id AS id, m.title, m.tagline, m.overview, m.release_date,
       f.actor_id, f.actor_name, f.character_name, f.cast_order,
       f.crew_member_id, f.crew_member_name, f.department_name, f.job,
       f.genre_name, f.country_name, f.language_name, f.language_role,
       f.company_name
FROM movie m
LEFT JOIN LATERAL (
    SELECT 1 AS facet,
           mc.person_id AS actor_id, p.person_name AS actor_name,
           mc.character_name, mc.cast_order,
           NULL::BIGINT AS crew_member_id, NULL::TEXT AS crew_member_name,
           NULL::TEXT AS department_name, NULL::TEXT AS job,
           NULL::TEXT AS genre_name, NULL::TEXT AS country_name,
           NULL::TEXT AS language_name, NULL::TEXT AS language_role,
           NULL::TEXT AS company_name,
           p.person_name::TEXT AS sort_key
    FROM movie_cast mc
    JOIN person p ON p.person_id = mc.person_id
    WHERE mc.movie_id = m.movie_id
    UNION ALL
    SELECT 2, NULL, NULL, NULL, NULL,
           cr.person_id, p.person_name, d.department_name, cr.job,
           NULL, NULL, NULL, NULL, NULL,
           COALESCE(d.department_name, '') || ' ' || p.person_name
    FROM movie_crew cr
    JOIN person p ON p.person_id = cr.person_id
    LEFT JOIN department d ON d.department_id = cr.department_id
    WHERE cr.movie_id = m.movie_id
    UNION ALL
    SELECT 3, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL,
           g.genre_name, NULL, NULL, NULL, NULL, g.genre_name
    FROM movie_genres mg
    JOIN genre g ON g.genre_id = mg.genre_id
    WHERE mg.movie_id = m.movie_id
    UNION ALL
    SELECT 4, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL,
           NULL, c.country_name, NULL, NULL, NULL, c.country_name
    FROM production_country pc
    JOIN country c ON c.country_id = pc.country_id
    WHERE pc.movie_id = m.movie_id
    UNION ALL
    SELECT 5, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL,
           NULL, NULL, l.language_name, lr.language_role, NULL, l.language_name
    FROM movie_languages ml
    JOIN language l ON l.language_id = ml.language_id
    LEFT JOIN language_role lr ON lr.role_id = ml.language_role_id
    WHERE ml.movie_id = m.movie_id
    UNION ALL
    SELECT 6, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL,
           NULL, NULL, NULL, NULL, co.company_name, co.company_name
    FROM movie_company mco
    JOIN production_company co ON co.company_id = mco.company_id
    WHERE mco.movie_id = m.movie_id
) f ON true
WHERE m.movie_id = $1
ORDER BY f.facet, f.cast_order NULLS LAST, f.sort_key";

/// Provides read queries over movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Movies whose title contains `term`, or whose overview or tagline
    /// contains it as a space-delimited word. Unordered; ranking happens
    /// in the search aggregator.
    pub async fn search_candidates(
        pool: &PgPool,
        term: &str,
    ) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie m
             WHERE m.title ILIKE $1
                OR m.overview ILIKE $2
                OR m.tagline ILIKE $2"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(contains_pattern(term))
            .bind(word_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Movies linked to the named genre, country or language, compared
    /// case-insensitively against the whole name.
    pub async fn list_by_category(
        pool: &PgPool,
        category: Category,
        value: &str,
    ) -> Result<Vec<MovieRow>, sqlx::Error> {
        let link = match category {
            Category::Genre => {
                "SELECT 1 FROM movie_genres mg
                 JOIN genre g ON g.genre_id = mg.genre_id
                 WHERE mg.movie_id = m.movie_id AND g.genre_name ILIKE $1"
            }
            Category::Country => {
                "SELECT 1 FROM production_country pc
                 JOIN country c ON c.country_id = pc.country_id
                 WHERE pc.movie_id = m.movie_id AND c.country_name ILIKE $1"
            }
            Category::Language => {
                "SELECT 1 FROM movie_languages ml
                 JOIN language l ON l.language_id = ml.language_id
                 WHERE ml.movie_id = m.movie_id AND l.language_name ILIKE $1"
            }
        };
        let query = format!(
            "SELECT {COLUMNS} FROM movie m
             WHERE EXISTS ({link})
             ORDER BY m.title"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(exact_pattern(value))
            .fetch_all(pool)
            .await
    }

    /// The `limit` most popular movies, most popular first.
    pub async fn list_popular(pool: &PgPool, limit: i64) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movie m
             ORDER BY m.popularity DESC NULLS LAST, m.title
             LIMIT $1"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Rows of the composed detail query. Empty when the movie does not
    /// exist; a single all-`NULL`-facet row when it has no credits.
    pub async fn detail_rows(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<MovieDetailJoinRow>, sqlx::Error> {
        sqlx::query_as::<_, MovieDetailJoinRow>(DETAIL_QUERY)
            .bind(movie_id)
            .fetch_all(pool)
            .await
    }

    /// Distinct movies where the person holds a crew credit matching
    /// `job_pattern`, newest release first.
    pub async fn directed_by(
        pool: &PgPool,
        person_id: DbId,
        job_pattern: &str,
    ) -> Result<Vec<DirectedMovieRow>, sqlx::Error> {
        sqlx::query_as::<_, DirectedMovieRow>(
            "SELECT m.movie_id, m.title, m.release_date
             FROM movie m
             WHERE EXISTS (
                 SELECT 1 FROM movie_crew cr
                 WHERE cr.movie_id = m.movie_id
                   AND cr.person_id = $1
                   AND cr.job ILIKE $2
             )
             ORDER BY m.release_date DESC NULLS LAST, m.title",
        )
        .bind(person_id)
        .bind(job_pattern)
        .fetch_all(pool)
        .await
    }
}
