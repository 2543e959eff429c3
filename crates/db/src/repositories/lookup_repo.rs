//! Repository for the genre, country and language lookup tables.

use sqlx::PgPool;

/// Provides the distinct names used to populate navigation menus.
pub struct LookupRepo;

impl LookupRepo {
    pub async fn genre_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT genre_name FROM genre
             WHERE genre_name IS NOT NULL AND genre_name <> ''
             ORDER BY genre_name",
        )
        .fetch_all(pool)
        .await
    }

    /// Countries with at least one production link.
    pub async fn country_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT c.country_name
             FROM country c
             JOIN production_country pc ON pc.country_id = c.country_id
             WHERE c.country_name IS NOT NULL AND c.country_name <> ''
             ORDER BY c.country_name",
        )
        .fetch_all(pool)
        .await
    }

    /// Languages linked to at least one movie.
    pub async fn language_names(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT l.language_name
             FROM language l
             JOIN movie_languages ml ON ml.language_id = l.language_id
             WHERE l.language_name IS NOT NULL AND l.language_name <> ''
             ORDER BY l.language_name",
        )
        .fetch_all(pool)
        .await
    }
}
