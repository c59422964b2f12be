//! HTTP-level tests for `/leaderboard`.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get, get_auth, post_json, post_json_auth, token_for};
use pathway_db::models::user::User;
use serde_json::json;
use sqlx::PgPool;

async fn publish_lessons(pool: &PgPool, author: &User, n: usize) -> Vec<String> {
    let lessons: Vec<_> = (0..n)
        .map(|i| json!({ "title": format!("Lesson {i}"), "type": "quiz", "content": "q" }))
        .collect();
    let body = json!({ "title": "Ranked path", "modules": [{ "title": "Only", "lessons": lessons }] });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/paths/publish", body, &token_for(author)).await;
    let json = body_json(response).await;
    json["data"]["topics"][0]["lessons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

async fn complete(pool: &PgPool, user: &User, lessons: &[String]) {
    let app = common::build_test_app(pool.clone());
    for lesson in lessons {
        let body = json!({ "userId": user.id, "lessonId": lesson, "completed": true });
        let response = post_json(app.clone(), "/api/v1/progress", body).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_ranks_by_completed_count(pool: PgPool) {
    let author = create_user(&pool, "author@example.com", "admin").await;
    let lessons = publish_lessons(&pool, &author, 5).await;

    let zed = create_user(&pool, "zed@example.com", "user").await;
    let amy = create_user(&pool, "amy@example.com", "user").await;
    let bea = create_user(&pool, "bea@example.com", "user").await;
    complete(&pool, &zed, &lessons[..5]).await;
    complete(&pool, &amy, &lessons[..5]).await;
    complete(&pool, &bea, &lessons[..3]).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/leaderboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 3);

    // Tied counts order by email, and ranks follow position.
    assert_eq!(entries[0]["username"], "amy");
    assert_eq!(entries[0]["rank"], 1);
    assert_eq!(entries[0]["points"], 50);
    assert_eq!(entries[1]["username"], "zed");
    assert_eq!(entries[1]["rank"], 2);
    assert_eq!(entries[1]["completedCount"], 5);
    assert_eq!(entries[2]["username"], "bea");
    assert_eq!(entries[2]["rank"], 3);
    assert_eq!(entries[2]["points"], 30);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_is_stable_across_calls(pool: PgPool) {
    let author = create_user(&pool, "author@example.com", "admin").await;
    let lessons = publish_lessons(&pool, &author, 2).await;
    for email in ["c@example.com", "a@example.com", "b@example.com"] {
        let user = create_user(&pool, email, "user").await;
        complete(&pool, &user, &lessons).await;
    }

    let app = common::build_test_app(pool);
    let first = body_json(get(app.clone(), "/api/v1/leaderboard").await).await;
    let second = body_json(get(app, "/api/v1/leaderboard").await).await;
    assert_eq!(first, second);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_me(pool: PgPool) {
    let author = create_user(&pool, "author@example.com", "admin").await;
    let lessons = publish_lessons(&pool, &author, 2).await;
    let learner = create_user(&pool, "learner@example.com", "user").await;
    complete(&pool, &learner, &lessons).await;
    let idle = create_user(&pool, "idle@example.com", "user").await;

    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/leaderboard/me", &token_for(&learner)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "learner");
    assert_eq!(json["data"]["rank"], 1);
    assert_eq!(json["data"]["points"], 20);

    let response = get_auth(app.clone(), "/api/v1/leaderboard/me", &token_for(&idle)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/v1/leaderboard/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_me_with_shared_username(pool: PgPool) {
    let author = create_user(&pool, "author@example.com", "admin").await;
    let lessons = publish_lessons(&pool, &author, 3).await;
    let alpha = create_user(&pool, "amy@alpha.io", "user").await;
    let beta = create_user(&pool, "amy@beta.io", "user").await;
    complete(&pool, &alpha, &lessons[..3]).await;
    complete(&pool, &beta, &lessons[..1]).await;

    let app = common::build_test_app(pool);

    let response = get_auth(app.clone(), "/api/v1/leaderboard/me", &token_for(&beta)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["userId"], beta.id.to_string());
    assert_eq!(json["data"]["username"], "amy");
    assert_eq!(json["data"]["rank"], 2);
    assert_eq!(json["data"]["points"], 10);

    let response = get_auth(app, "/api/v1/leaderboard/me", &token_for(&alpha)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["userId"], alpha.id.to_string());
    assert_eq!(json["data"]["rank"], 1);
}
