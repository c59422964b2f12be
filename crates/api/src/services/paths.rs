//! Learning paths, including the transactional publish flow.

use pathway_core::path::{category_or_default, difficulty_or_default};
use pathway_core::types::DbId;
use pathway_db::fetch::PathFetch;
use pathway_db::models::lesson::CreateLesson;
use pathway_db::models::path::{
    CreatePath, NewPath, Path, PathDetail, PathFilter, PublishPath, UpdatePath,
};
use pathway_db::models::topic::CreateTopic;
use pathway_db::repositories::{LessonRepo, PathRepo, TopicRepo, UserRepo};
use sqlx::PgPool;

use super::required;
use crate::error::{AppError, AppResult};

pub async fn list(pool: &PgPool, filter: &PathFilter) -> AppResult<Vec<Path>> {
    Ok(PathRepo::list(pool, filter).await?)
}

/// The full tree: author, topics by `order`, each with lessons and questions.
pub async fn get(pool: &PgPool, id: DbId) -> AppResult<PathDetail> {
    PathRepo::find_detail(pool, id, PathFetch::FULL)
        .await?
        .ok_or(AppError::not_found("Path", id))
}

/// Create a single path row for an existing author.
///
/// Difficulty defaults to `beginner`, category to `general`, and the path is
/// published unless the caller says otherwise.
pub async fn create(pool: &PgPool, input: &CreatePath) -> AppResult<Path> {
    let user_id = required(input.user_id, "userId")?;
    if !UserRepo::exists(pool, user_id).await? {
        return Err(AppError::not_found("User", user_id));
    }

    let new_path = NewPath {
        title: input.title.clone(),
        description: input.description.clone(),
        difficulty: difficulty_or_default(input.difficulty.as_deref())?,
        category: category_or_default(input.category.as_deref()),
        user_id,
        published: input.published.unwrap_or(true),
    };
    let path = PathRepo::create(pool, &new_path).await?;
    tracing::info!(path_id = %path.id, user_id = %path.user_id, "Path created");
    Ok(path)
}

/// Store a whole path tree as one unit of work.
///
/// Inserts the path, then each module as a topic with `order` equal to its
/// index, then each module's lessons with `order` equal to their index
/// within the module. Everything runs in one transaction that is committed
/// once at the end; any failure drops the transaction and rolls back every
/// row written so far.
pub async fn publish(pool: &PgPool, author_id: DbId, input: &PublishPath) -> AppResult<PathDetail> {
    if !UserRepo::exists(pool, author_id).await? {
        return Err(AppError::not_found("User", author_id));
    }

    let new_path = NewPath {
        title: input.title.clone(),
        description: input.description.clone(),
        difficulty: difficulty_or_default(input.difficulty.as_deref())?,
        category: category_or_default(input.category.as_deref()),
        user_id: author_id,
        published: input.published.unwrap_or(true),
    };

    let mut tx = pool.begin().await?;

    let path = PathRepo::create(&mut *tx, &new_path).await?;
    let mut lesson_count = 0usize;

    for (module_index, module) in input.modules.iter().enumerate() {
        let topic = TopicRepo::create(
            &mut *tx,
            path.id,
            &CreateTopic {
                title: module.title.clone(),
                description: module.description.clone(),
                sort_order: Some(position(module_index)?),
                path_id: Some(path.id),
            },
        )
        .await?;

        for (lesson_index, lesson) in module.lessons.iter().enumerate() {
            LessonRepo::create(
                &mut *tx,
                topic.id,
                &CreateLesson {
                    title: lesson.title.clone(),
                    description: lesson.description.clone(),
                    content: lesson.content.clone(),
                    lesson_type: lesson.lesson_type.clone(),
                    duration: lesson.duration.clone(),
                    sort_order: Some(position(lesson_index)?),
                    topic_id: Some(topic.id),
                },
            )
            .await?;
            lesson_count += 1;
        }
    }

    tx.commit().await?;

    tracing::info!(
        path_id = %path.id,
        user_id = %author_id,
        modules = input.modules.len(),
        lessons = lesson_count,
        published = path.published,
        "Path tree published"
    );

    get(pool, path.id).await
}

pub async fn update(pool: &PgPool, id: DbId, input: &UpdatePath) -> AppResult<Path> {
    if !PathRepo::exists(pool, id).await? {
        return Err(AppError::not_found("Path", id));
    }
    let path = PathRepo::update(pool, id, input)
        .await?
        .ok_or(AppError::not_found("Path", id))?;
    tracing::info!(path_id = %id, "Path updated");
    Ok(path)
}

/// Delete a path; topics, lessons, questions, their progress, and the
/// path's discussions go with it.
pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
    if !PathRepo::exists(pool, id).await? {
        return Err(AppError::not_found("Path", id));
    }
    PathRepo::delete(pool, id).await?;
    tracing::info!(path_id = %id, "Path deleted");
    Ok(())
}

/// Convert a zero-based list index into a stored `order` value.
fn position(index: usize) -> AppResult<i32> {
    i32::try_from(index).map_err(|_| AppError::BadRequest("Too many items in path tree".into()))
}
