//! Repository for the `users` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, username, email, password_hash, last_login_at, created_at, updated_at";

/// Provides account queries for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, username, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username or email (case-sensitive).
    pub async fn find_by_login(pool: &PgPool, login: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE username = $1 OR email = $1
             ORDER BY (username = $1) DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(login)
            .fetch_optional(pool)
            .await
    }

    /// Name of the first field already taken by another account, checked
    /// in the order name, username, email.
    pub async fn find_taken_field(
        pool: &PgPool,
        name: &str,
        username: &str,
        email: &str,
    ) -> Result<Option<&'static str>, sqlx::Error> {
        let (name_taken, username_taken, email_taken) = sqlx::query_as::<_, (bool, bool, bool)>(
            "SELECT
                EXISTS (SELECT 1 FROM users WHERE name = $1),
                EXISTS (SELECT 1 FROM users WHERE username = $2),
                EXISTS (SELECT 1 FROM users WHERE email = $3)",
        )
        .bind(name)
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await?;

        Ok(if name_taken {
            Some("name")
        } else if username_taken {
            Some("username")
        } else if email_taken {
            Some("email")
        } else {
            None
        })
    }

    /// Stamp `last_login_at` and return the refreshed row, or `None` when
    /// the account was deleted in the meantime.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET last_login_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
