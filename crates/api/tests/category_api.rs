//! HTTP-level integration tests for the `/api/categories` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../migrations")]
async fn create_category_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/categories",
        serde_json::json!({"name": "Live Music", "slug": "music"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Live Music");
    assert_eq!(json["slug"], "music");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_slug_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/categories",
        serde_json::json!({"name": "Live Music", "slug": "music"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/categories",
        serde_json::json!({"name": "More Music", "slug": "music"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn malformed_slug_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/categories",
        serde_json::json!({"name": "Live Music", "slug": "live music!"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_category_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/categories",
            serde_json::json!({"name": "Theatre", "slug": "theatre"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["slug"], "theatre");
}

#[sqlx::test(migrations = "../../migrations")]
async fn get_nonexistent_category_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_category(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/categories",
            serde_json::json!({"name": "Live Music", "slug": "music"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/categories/{id}"),
        serde_json::json!({"name": "Concerts"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Concerts");
    assert_eq!(json["slug"], "music");
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_category_returns_204(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/categories",
            serde_json::json!({"name": "Fleeting", "slug": "fleeting"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_categories(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/categories",
        serde_json::json!({"name": "Live Music", "slug": "music"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/categories",
        serde_json::json!({"name": "Theatre", "slug": "theatre"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/categories").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
}
