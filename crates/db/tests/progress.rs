//! Progress upsert semantics, per-user aggregates, and leaderboard ordering.

use pathway_core::path::PathDifficulty;
use pathway_core::progress::ProgressTarget;
use pathway_db::models::lesson::{CreateLesson, Lesson};
use pathway_db::models::path::NewPath;
use pathway_db::models::question::{CreateQuestion, Question};
use pathway_db::models::topic::{CreateTopic, Topic};
use pathway_db::models::user::{CreateUser, User};
use pathway_db::repositories::{
    LeaderboardRepo, LessonRepo, PathRepo, ProgressRepo, QuestionRepo, TopicRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_user(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        name: None,
        password: None,
    };
    UserRepo::create(pool, &input, None, "user").await.unwrap()
}

async fn create_topic(pool: &PgPool, author: &User) -> Topic {
    let path = PathRepo::create(
        pool,
        &NewPath {
            title: "Progress path".to_string(),
            description: None,
            difficulty: PathDifficulty::Beginner,
            category: "general".to_string(),
            user_id: author.id,
            published: true,
        },
    )
    .await
    .unwrap();
    TopicRepo::create(
        pool,
        path.id,
        &CreateTopic {
            title: "Progress topic".to_string(),
            description: None,
            sort_order: None,
            path_id: Some(path.id),
        },
    )
    .await
    .unwrap()
}

async fn create_lessons(pool: &PgPool, topic: &Topic, n: usize) -> Vec<Lesson> {
    let mut lessons = Vec::with_capacity(n);
    for i in 0..n {
        let lesson = LessonRepo::create(
            pool,
            topic.id,
            &CreateLesson {
                title: format!("Lesson {i}"),
                description: None,
                content: String::new(),
                lesson_type: "article".to_string(),
                duration: None,
                sort_order: Some(i as i32),
                topic_id: Some(topic.id),
            },
        )
        .await
        .unwrap();
        lessons.push(lesson);
    }
    lessons
}

async fn create_question(pool: &PgPool, topic: &Topic) -> Question {
    QuestionRepo::create(
        pool,
        topic.id,
        &CreateQuestion {
            question: "What is a borrow?".to_string(),
            answer: "A reference".to_string(),
            difficulty: None,
            question_type: None,
            topic_id: Some(topic.id),
        },
    )
    .await
    .unwrap()
}

async fn progress_rows(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM progress")
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Upsert
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_twice_keeps_one_row_with_latest_values(pool: PgPool) {
    let user = create_user(&pool, "learner@example.com").await;
    let topic = create_topic(&pool, &user).await;
    let question = create_question(&pool, &topic).await;
    let target = ProgressTarget::Question(question.id);

    let first = ProgressRepo::upsert(&pool, user.id, target, Some(false), Some(40))
        .await
        .unwrap();
    assert!(!first.completed);
    assert!(first.completed_at.is_none());

    let second = ProgressRepo::upsert(&pool, user.id, target, Some(true), Some(95))
        .await
        .unwrap();
    assert_eq!(second.id, first.id);
    assert!(second.completed);
    assert_eq!(second.score, Some(95));
    assert!(second.completed_at.is_some());

    assert_eq!(progress_rows(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completed_at_lifecycle(pool: PgPool) {
    let user = create_user(&pool, "lifecycle@example.com").await;
    let topic = create_topic(&pool, &user).await;
    let lesson = create_lessons(&pool, &topic, 1).await.remove(0);
    let target = ProgressTarget::Lesson(lesson.id);

    let done = ProgressRepo::upsert(&pool, user.id, target, Some(true), None)
        .await
        .unwrap();
    let stamped = done.completed_at.expect("completing stamps completed_at");

    // Staying complete keeps the original stamp; omitted fields keep values.
    let again = ProgressRepo::upsert(&pool, user.id, target, Some(true), Some(70))
        .await
        .unwrap();
    assert_eq!(again.completed_at, Some(stamped));
    let score_only = ProgressRepo::upsert(&pool, user.id, target, None, None)
        .await
        .unwrap();
    assert!(score_only.completed);
    assert_eq!(score_only.score, Some(70));
    assert_eq!(score_only.completed_at, Some(stamped));

    // Marking incomplete clears the stamp.
    let undone = ProgressRepo::upsert(&pool, user.id, target, Some(false), None)
        .await
        .unwrap();
    assert!(!undone.completed);
    assert!(undone.completed_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_row_without_completed_starts_incomplete(pool: PgPool) {
    let user = create_user(&pool, "fresh@example.com").await;
    let topic = create_topic(&pool, &user).await;
    let lesson = create_lessons(&pool, &topic, 1).await.remove(0);

    let row = ProgressRepo::upsert(&pool, user.id, ProgressTarget::Lesson(lesson.id), None, None)
        .await
        .unwrap();
    assert!(!row.completed);
    assert!(row.score.is_none());
    assert_eq!(row.lesson_id, Some(lesson.id));
    assert!(row.question_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_upserts_produce_one_row(pool: PgPool) {
    let user = create_user(&pool, "racer@example.com").await;
    let topic = create_topic(&pool, &user).await;
    let question = create_question(&pool, &topic).await;
    let target = ProgressTarget::Question(question.id);

    let (a, b) = tokio::join!(
        ProgressRepo::upsert(&pool, user.id, target, Some(true), Some(10)),
        ProgressRepo::upsert(&pool, user.id, target, Some(true), Some(20)),
    );
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_eq!(a.id, b.id);
    assert_eq!(progress_rows(&pool).await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_row_must_have_exactly_one_target(pool: PgPool) {
    let user = create_user(&pool, "check@example.com").await;
    let err = sqlx::query("INSERT INTO progress (user_id) VALUES ($1)")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.constraint(), Some("ck_progress_single_target"));
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_counts_and_average_over_completed_rows(pool: PgPool) {
    let user = create_user(&pool, "stats@example.com").await;
    let topic = create_topic(&pool, &user).await;
    let lessons = create_lessons(&pool, &topic, 4).await;

    for (lesson, score) in lessons.iter().zip([80, 90, 100]) {
        ProgressRepo::upsert(&pool, user.id, ProgressTarget::Lesson(lesson.id), Some(true), Some(score))
            .await
            .unwrap();
    }
    // Incomplete rows count toward the total but not the average.
    ProgressRepo::upsert(&pool, user.id, ProgressTarget::Lesson(lessons[3].id), Some(false), Some(10))
        .await
        .unwrap();

    assert_eq!(ProgressRepo::count_by_user(&pool, user.id, None).await.unwrap(), 4);
    assert_eq!(ProgressRepo::count_by_user(&pool, user.id, Some(true)).await.unwrap(), 3);
    let avg = ProgressRepo::average_completed_score(&pool, user.id).await.unwrap();
    assert_eq!(avg, Some(90.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_aggregates_for_user_without_progress(pool: PgPool) {
    let user = create_user(&pool, "idle@example.com").await;
    assert_eq!(ProgressRepo::count_by_user(&pool, user.id, None).await.unwrap(), 0);
    assert_eq!(ProgressRepo::average_completed_score(&pool, user.id).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_entries_carry_item_and_path(pool: PgPool) {
    let user = create_user(&pool, "entries@example.com").await;
    let topic = create_topic(&pool, &user).await;
    let lesson = create_lessons(&pool, &topic, 1).await.remove(0);
    let question = create_question(&pool, &topic).await;

    ProgressRepo::upsert(&pool, user.id, ProgressTarget::Lesson(lesson.id), Some(true), None)
        .await
        .unwrap();
    ProgressRepo::upsert(&pool, user.id, ProgressTarget::Question(question.id), None, None)
        .await
        .unwrap();

    let entries = ProgressRepo::list_entries_by_user(&pool, user.id).await.unwrap();
    assert_eq!(entries.len(), 2);
    for entry in &entries {
        assert_eq!(entry.topic_id, Some(topic.id));
        assert_eq!(entry.path_id, Some(topic.path_id));
        assert_eq!(entry.path_title.as_deref(), Some("Progress path"));
    }
    let titles: Vec<_> = entries.iter().filter_map(|e| e.item_title.as_deref()).collect();
    assert!(titles.contains(&"Lesson 0"));
    assert!(titles.contains(&"What is a borrow?"));
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_leaderboard_orders_by_count_then_email(pool: PgPool) {
    let author = create_user(&pool, "author@example.com").await;
    let topic = create_topic(&pool, &author).await;
    let lessons = create_lessons(&pool, &topic, 5).await;

    let carol = create_user(&pool, "carol@example.com").await;
    let bob = create_user(&pool, "bob@example.com").await;
    let amy = create_user(&pool, "amy@example.com").await;

    for (user, n) in [(&carol, 3), (&bob, 5), (&amy, 5)] {
        for lesson in &lessons[..n] {
            ProgressRepo::upsert(&pool, user.id, ProgressTarget::Lesson(lesson.id), Some(true), None)
                .await
                .unwrap();
        }
    }

    let rows = LeaderboardRepo::top(&pool, 50).await.unwrap();
    let emails: Vec<_> = rows.iter().map(|r| r.email.as_str()).collect();
    assert_eq!(emails, ["amy@example.com", "bob@example.com", "carol@example.com"]);
    assert_eq!(rows[2].completed_count, 3);

    let limited = LeaderboardRepo::top(&pool, 1).await.unwrap();
    assert_eq!(limited.len(), 1);
}
