//! HTTP-level tests for `/progress`: the upsert, listing, and statistics.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, delete, get, post_json, post_json_auth, token_for};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

/// Publish a one-module path with `n` lessons and return the lesson ids.
async fn publish_lessons(pool: &PgPool, n: usize) -> Vec<String> {
    let author = create_user(pool, "author@example.com", "user").await;
    let token = token_for(&author);
    let lessons: Vec<_> = (0..n)
        .map(|i| json!({ "title": format!("Lesson {i}"), "type": "article", "content": "text" }))
        .collect();
    let body = json!({ "title": "Progress path", "modules": [{ "title": "Only", "lessons": lessons }] });

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/paths/publish", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["topics"][0]["lessons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

async fn progress_rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM progress")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_twice_updates_single_row(pool: PgPool) {
    let lessons = publish_lessons(&pool, 1).await;
    let learner = create_user(&pool, "learner@example.com", "user").await;
    let app = common::build_test_app(pool.clone());

    let first = json!({ "userId": learner.id, "lessonId": lessons[0], "score": 50 });
    let response = post_json(app.clone(), "/api/v1/progress", first).await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    assert_eq!(created["data"]["completed"], false);
    assert!(created["data"]["completedAt"].is_null());

    let second = json!({ "userId": learner.id, "lessonId": lessons[0], "completed": true, "score": 85 });
    let response = post_json(app, "/api/v1/progress", second).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["data"]["id"], created["data"]["id"]);
    assert_eq!(updated["data"]["completed"], true);
    assert_eq!(updated["data"]["score"], 85);
    assert!(updated["data"]["completedAt"].is_string());
    assert_eq!(progress_rows(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_requires_exactly_one_target(pool: PgPool) {
    let lessons = publish_lessons(&pool, 1).await;
    let learner = create_user(&pool, "learner@example.com", "user").await;
    let app = common::build_test_app(pool.clone());

    let neither = json!({ "userId": learner.id, "completed": true });
    let response = post_json(app.clone(), "/api/v1/progress", neither).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Either lessonId or questionId is required");

    let both = json!({ "userId": learner.id, "lessonId": lessons[0], "questionId": Uuid::new_v4() });
    let response = post_json(app, "/api/v1/progress", both).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(progress_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_unknown_user_or_lesson_returns_404(pool: PgPool) {
    let lessons = publish_lessons(&pool, 1).await;
    let learner = create_user(&pool, "learner@example.com", "user").await;
    let app = common::build_test_app(pool);

    let body = json!({ "userId": Uuid::new_v4(), "lessonId": lessons[0] });
    let response = post_json(app.clone(), "/api/v1/progress", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json!({ "userId": learner.id, "lessonId": Uuid::new_v4() });
    let response = post_json(app, "/api/v1/progress", body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Lesson with id"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_score_is_rejected(pool: PgPool) {
    let lessons = publish_lessons(&pool, 1).await;
    let learner = create_user(&pool, "learner@example.com", "user").await;
    let app = common::build_test_app(pool);

    let body = json!({ "userId": learner.id, "lessonId": lessons[0], "score": -1 });
    let response = post_json(app.clone(), "/api/v1/progress", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"][0]["field"], "score");

    // Without a user both problems are reported together.
    let body = json!({ "lessonId": lessons[0], "score": -1 });
    let response = post_json(app, "/api/v1/progress", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"][0]["field"], "score");
    assert_eq!(json["details"][1], json!({ "field": "userId", "message": "Required" }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_over_mixed_progress(pool: PgPool) {
    let lessons = publish_lessons(&pool, 4).await;
    let learner = create_user(&pool, "learner@example.com", "user").await;
    let app = common::build_test_app(pool);

    for (lesson, score) in lessons.iter().zip([80, 90, 100]) {
        let body = json!({ "userId": learner.id, "lessonId": lesson, "completed": true, "score": score });
        let response = post_json(app.clone(), "/api/v1/progress", body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    let body = json!({ "userId": learner.id, "lessonId": lessons[3], "completed": false });
    post_json(app.clone(), "/api/v1/progress", body).await;

    let response = get(app.clone(), &format!("/api/v1/progress/user/{}/stats", learner.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 4);
    assert_eq!(json["data"]["completed"], 3);
    assert_eq!(json["data"]["completionRate"], 75.0);
    assert_eq!(json["data"]["averageScore"], 90.0);

    let response = get(app, &format!("/api/v1/progress/user/{}", learner.id)).await;
    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["pathTitle"], "Progress path");
    assert!(entries[0]["itemTitle"].as_str().unwrap().starts_with("Lesson"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_for_user_without_progress_are_zero(pool: PgPool) {
    let learner = create_user(&pool, "idle@example.com", "user").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/progress/user/{}/stats", learner.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["completionRate"], 0.0);
    assert_eq!(json["data"]["averageScore"], 0.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_for_unknown_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/progress/user/{}/stats", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_progress(pool: PgPool) {
    let lessons = publish_lessons(&pool, 1).await;
    let learner = create_user(&pool, "learner@example.com", "user").await;
    let app = common::build_test_app(pool.clone());

    let body = json!({ "userId": learner.id, "lessonId": lessons[0] });
    let json = body_json(post_json(app.clone(), "/api/v1/progress", body).await).await;
    let uri = format!("/api/v1/progress/{}", json["data"]["id"].as_str().unwrap());

    assert_eq!(delete(app.clone(), &uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(delete(app, &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(progress_rows(&pool).await, 0);
}
