//! Integration tests for registration, login and the profile endpoint.

mod common;

use axum::http::StatusCode;
use cinedex_api::auth::jwt::generate_access_token;
use common::{body_json, get, get_with_cookie, post_json, post_with_cookie, set_cookies};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Input validation (rejected before touching the database)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({
            "name": "Agnès Varda",
            "email": "not-an-email",
            "username": "agnes",
            "password": "cleo-5-to-7"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn register_rejects_short_password() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        json!({
            "name": "Agnès Varda",
            "email": "agnes@example.com",
            "username": "agnes",
            "password": "cleo"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("at least 8"));
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_requires_authentication() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/profile").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn profile_rejects_forged_cookie() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get_with_cookie(app, "/api/v1/profile", "access_token=forged.jwt.value").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_cookie_reaches_the_handler() {
    let config = common::test_config();
    let token = generate_access_token(7, "agnes", &config.jwt).unwrap();

    let app = common::build_test_app(common::unreachable_pool());
    let response =
        get_with_cookie(app, "/api/v1/profile", &format!("access_token={token}")).await;

    // Authenticated, then the user lookup fails on the missing database.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn login_failure_on_missing_database_is_internal() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": "agnes", "password": "cleo-5-to-7" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn logout_clears_the_access_cookie() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = post_with_cookie(app, "/api/v1/auth/logout", "access_token=whatever").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(set_cookies(&response), vec!["access_token=".to_string()]);
}

// ---------------------------------------------------------------------------
// Full flow (database)
// ---------------------------------------------------------------------------

fn registration() -> serde_json::Value {
    json!({
        "name": "Agnès Varda",
        "email": "agnes@example.com",
        "username": "agnes",
        "password": "cleo-5-to-7"
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_login_profile_flow(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        registration(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let profile = body_json(response).await["data"].clone();
    assert_eq!(profile["username"], "agnes");
    assert!(profile.get("password_hash").is_none());

    // Login by email.
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({ "username": "agnes@example.com", "password": "cleo-5-to-7" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("access_token="));
    assert!(body_json(response).await["data"]["user"]["last_login_at"].is_string());

    let response = get_with_cookie(
        common::build_test_app(pool),
        "/api/v1/profile",
        &cookies.join("; "),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["email"], "agnes@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_registration_conflicts(pool: PgPool) {
    let first = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        registration(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/register",
        registration(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_password_and_unknown_user_look_the_same(pool: PgPool) {
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        registration(),
    )
    .await;

    let wrong_password = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({ "username": "agnes", "password": "wrong-password" }),
    )
    .await;
    let unknown_user = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        json!({ "username": "jacques", "password": "cleo-5-to-7" }),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookies(&wrong_password).is_empty());
    assert_eq!(
        body_json(wrong_password).await["error"],
        body_json(unknown_user).await["error"]
    );
}
