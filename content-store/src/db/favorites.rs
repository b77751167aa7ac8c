/// Favorite database operations
use crate::error::Result;
use crate::models::Favorite;
use sqlx::PgPool;
use uuid::Uuid;

/// Add a post to a user's favorites (idempotent - repeated adds return
/// the existing row)
pub async fn add_favorite(pool: &PgPool, user_id: Uuid, post_id: Uuid) -> Result<Favorite> {
    let favorite = sqlx::query_as::<_, Favorite>(
        r#"
        INSERT INTO favorites (id, user_id, post_id, created_at)
        VALUES (uuid_generate_v4(), $1, $2, NOW())
        ON CONFLICT (user_id, post_id) DO UPDATE
        SET user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(favorite)
}

/// Remove a favorite (idempotent - returns whether a row was removed)
pub async fn remove_favorite(pool: &PgPool, user_id: Uuid, post_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND post_id = $2")
        .bind(user_id)
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Check if a user has favorited a post
pub async fn has_favorited(pool: &PgPool, user_id: Uuid, post_id: Uuid) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM favorites
            WHERE user_id = $1 AND post_id = $2
        )
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Get paginated favorites for a user, newest first
pub async fn get_user_favorites(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Favorite>> {
    let favorites = sqlx::query_as::<_, Favorite>(
        r#"
        SELECT * FROM favorites
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

    Ok(favorites)
}

/// Get favorite count for a post
pub async fn count_favorites_by_post(pool: &PgPool, post_id: Uuid) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
