/// Comment database operations
use crate::error::{Result, StoreError};
use crate::models::Comment;
use crate::validators::{validate_bounded_text, MAX_COMMENT_LEN};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new comment on a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    body: &str,
) -> Result<Comment> {
    if !validate_bounded_text(body, MAX_COMMENT_LEN) {
        return Err(StoreError::Validation(format!(
            "comment body must be 1-{} characters",
            MAX_COMMENT_LEN
        )));
    }

    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, body, user_id, post_id, created_at)
        VALUES (uuid_generate_v4(), $1, $2, $3, NOW())
        RETURNING *
        "#,
    )
    .bind(body)
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Get a single comment by ID
pub async fn get_comment_by_id(pool: &PgPool, comment_id: Uuid) -> Result<Option<Comment>> {
    let comment = sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
        .bind(comment_id)
        .fetch_optional(pool)
        .await?;

    Ok(comment)
}

/// Get all comments for a post, newest first
pub async fn get_comments_by_post(
    pool: &PgPool,
    post_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Comment>> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT * FROM comments
        WHERE post_id = $1
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(post_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Update comment body
pub async fn update_comment(pool: &PgPool, comment_id: Uuid, body: &str) -> Result<Comment> {
    if !validate_bounded_text(body, MAX_COMMENT_LEN) {
        return Err(StoreError::Validation(format!(
            "comment body must be 1-{} characters",
            MAX_COMMENT_LEN
        )));
    }

    let comment = sqlx::query_as::<_, Comment>(
        r#"
        UPDATE comments
        SET body = $1
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(body)
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    comment.ok_or_else(|| StoreError::NotFound(format!("comment {}", comment_id)))
}

/// Delete a comment
pub async fn delete_comment(pool: &PgPool, comment_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count comments for a post
pub async fn count_comments_by_post(pool: &PgPool, post_id: Uuid) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
