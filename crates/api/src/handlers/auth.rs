//! Handlers for the `/auth` resource (register, login, logout).
//!
//! Login hands out a signed token in the `access_token` cookie; response
//! bodies only carry the user profile.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderName, StatusCode};
use axum::response::AppendHeaders;
use axum::Json;
use cinedex_core::error::CoreError;
use cinedex_db::models::user::{CreateUser, User, UserProfile};
use cinedex_db::repositories::UserRepo;
use cinedex_db::DbPool;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::cookies::{expired_cookie, session_cookie, ACCESS_COOKIE};
use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Same message for an unknown login and a wrong password.
const BAD_CREDENTIALS: &str = "Invalid username or password";

/// The `Set-Cookie` header carrying (or clearing) the access token.
type AccessCookie = AppendHeaders<[(HeaderName, String); 1]>;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/login`. `username` also accepts an email.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body returned by login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserProfile,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account. Returns 201 with the new profile; 409 when the name,
/// username or email is already taken.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserProfile>>)> {
    let input = RegisterRequest {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        username: input.username.trim().to_string(),
        password: input.password,
    };
    input.validate()?;
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if let Some(field) =
        UserRepo::find_taken_field(&state.pool, &input.name, &input.username, &input.email).await?
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "An account with this {field} already exists"
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: input.name,
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserProfile::from(&user),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Check username (or email) and password, then set the `access_token`
/// cookie. Unknown accounts and wrong passwords get the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<(AccessCookie, Json<DataResponse<AuthResponse>>)> {
    let user = check_credentials(&state.pool, input.username.trim(), &input.password).await?;

    // The row may have vanished between the check and the update.
    let user = UserRepo::record_login(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into())))?;
    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    let jwt = &state.config.jwt;
    let token = generate_access_token(user.id, &user.username, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let cookie = session_cookie(
        ACCESS_COOKIE,
        &token,
        jwt.max_age_secs(),
        state.config.cookie_secure,
    );

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(DataResponse {
            data: AuthResponse {
                expires_in: jwt.max_age_secs(),
                user: UserProfile::from(&user),
            },
        }),
    ))
}

/// POST /api/v1/auth/logout
///
/// Tokens are not tracked server-side, so logging out only clears the
/// cookie. Always 204.
pub async fn logout(State(state): State<AppState>) -> (StatusCode, AccessCookie) {
    (
        StatusCode::NO_CONTENT,
        AppendHeaders([(
            SET_COOKIE,
            expired_cookie(ACCESS_COOKIE, state.config.cookie_secure),
        )]),
    )
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The account matching `login` whose password hash accepts `password`.
async fn check_credentials(pool: &DbPool, login: &str, password: &str) -> AppResult<User> {
    let unauthorized = || AppError::Core(CoreError::Unauthorized(BAD_CREDENTIALS.into()));

    let Some(user) = UserRepo::find_by_login(pool, login).await? else {
        tracing::debug!(login, "Login for unknown account");
        return Err(unauthorized());
    };

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !matches {
        tracing::debug!(user_id = user.id, "Login with wrong password");
        return Err(unauthorized());
    }
    Ok(user)
}
