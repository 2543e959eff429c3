//! Integration tests for the catalog endpoints.
//!
//! Most tests run against an unreachable database to check how each
//! endpoint degrades; the seeded tests need PostgreSQL.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Degraded behaviour (no database)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_degrades_to_empty_lists() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/search?q=%20alien%20").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["to_search"], "alien");
    for list in ["movies", "actors", "directors"] {
        assert_eq!(data[list]["rows"].as_array().unwrap().len(), 0, "{list}");
        assert_eq!(data[list]["total_count"], 0, "{list}");
        assert!(data[list].get("total_pages").is_none(), "{list}");
    }
    assert!(data.get("current_page").is_none());
}

#[tokio::test]
async fn paginated_search_reports_page_metadata() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/search?q=alien&movies_page=2&page_size=5").await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["movies"]["current_page"], 2);
    assert_eq!(data["movies"]["total_pages"], 0);
    assert_eq!(data["actors"]["current_page"], 1);
    assert_eq!(data["current_page"], 2);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/search/studio/Pixar").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn category_search_echoes_filter() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/search/genero/Drama").await;

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["filter"]["category"], "genre");
    assert_eq!(data["filter"]["value"], "Drama");
    assert!(data["to_search"].is_null());
    assert_eq!(data["movies"]["total_count"], 0);
}

#[tokio::test]
async fn movie_detail_fails_with_500_when_query_fails() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/movies/98").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn non_numeric_movie_id_is_rejected() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/movies/gladiator").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn popular_and_navbar_degrade_to_empty() {
    let pool = common::unreachable_pool();

    let response = get(common::build_test_app(pool.clone()), "/api/v1/movies/popular").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], serde_json::json!([]));

    let response = get(common::build_test_app(pool), "/api/v1/navbar").await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["genres"], serde_json::json!([]));
    assert_eq!(data["countries"], serde_json::json!([]));
    assert_eq!(data["languages"], serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Seeded database
// ---------------------------------------------------------------------------

async fn seed(pool: &PgPool) {
    sqlx::raw_sql(
        "INSERT INTO movie (movie_id, title, overview, release_date, popularity) VALUES
            (1, 'Alien', 'A crew meets an alien life form', '1979-05-25', 23.3),
            (2, 'Aliens', NULL, '1986-07-18', 21.7),
            (3, 'Prometheus', 'Ancestors of an alien race', '2012-05-30', 42.0);
         INSERT INTO person (person_id, person_name) VALUES (10, 'Sigourney Weaver'), (11, 'Ridley Scott');
         INSERT INTO department (department_id, department_name) VALUES (1, 'Directing');
         INSERT INTO movie_cast (movie_id, person_id, character_name, cast_order) VALUES
            (1, 10, 'Ripley', 0), (2, 10, 'Ripley', 0);
         INSERT INTO movie_crew (movie_id, person_id, department_id, job) VALUES
            (1, 11, 1, 'Director'), (3, 11, 1, 'Director');",
    )
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn search_returns_tiered_movies_with_placeholder_posters(pool: PgPool) {
    seed(&pool).await;
    let app = common::build_test_app(pool);

    let data = body_json(get(app, "/api/v1/search?q=alien").await).await["data"].clone();
    let titles: Vec<&str> = data["movies"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Alien", "Aliens", "Prometheus"]);
    assert!(data["movies"]["rows"][0]["poster_url"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn person_pages_resolve_and_404(pool: PgPool) {
    seed(&pool).await;

    let response = get(common::build_test_app(pool.clone()), "/api/v1/directors/11").await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["director_name"], "Ridley Scott");
    assert_eq!(data["movies"].as_array().unwrap().len(), 2);

    let response = get(common::build_test_app(pool.clone()), "/api/v1/actors/10").await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["actor_gender"], "No especificado");

    let response = get(common::build_test_app(pool), "/api/v1/actors/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
