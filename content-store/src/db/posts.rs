/// Post database operations
use crate::error::{Result, StoreError};
use crate::models::{Category, Post};
use crate::validators::{validate_bounded_text, MAX_POST_BODY_LEN, MAX_POST_TITLE_LEN};
use sqlx::PgPool;
use uuid::Uuid;

fn validate_post_fields(title: &str, body: &str) -> Result<()> {
    if !validate_bounded_text(title, MAX_POST_TITLE_LEN) {
        return Err(StoreError::Validation(format!(
            "title must be 1-{} characters",
            MAX_POST_TITLE_LEN
        )));
    }
    if !validate_bounded_text(body, MAX_POST_BODY_LEN) {
        return Err(StoreError::Validation(format!(
            "body must be 1-{} characters",
            MAX_POST_BODY_LEN
        )));
    }
    Ok(())
}

/// Create a new post owned by a user
pub async fn create_post(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    body: &str,
    category: Category,
) -> Result<Post> {
    validate_post_fields(title, body)?;

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, user_id, title, body, category, created_at, updated_at)
        VALUES (uuid_generate_v4(), $1, $2, $3, $4, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(body)
    .bind(category)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

    Ok(post)
}

/// Find all posts by a user, newest first
pub async fn find_posts_by_user(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT * FROM posts
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Update title, body, and category, refreshing the update timestamp
pub async fn update_post(
    pool: &PgPool,
    post_id: Uuid,
    title: &str,
    body: &str,
    category: Category,
) -> Result<Post> {
    validate_post_fields(title, body)?;

    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = $1, body = $2, category = $3, updated_at = NOW()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(category)
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    post.ok_or_else(|| StoreError::NotFound(format!("post {}", post_id)))
}

/// Delete a post
///
/// Fails while media, comments, or favorites still reference the post.
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count total posts for a user
pub async fn count_posts_by_user(pool: &PgPool, user_id: Uuid) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
