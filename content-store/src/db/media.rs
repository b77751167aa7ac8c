/// Media database operations
use crate::error::{Result, StoreError};
use crate::models::{Media, MediaKind};
use sqlx::PgPool;
use uuid::Uuid;

/// Attach a media item to a post
pub async fn create_media(
    pool: &PgPool,
    post_id: Uuid,
    media_type: MediaKind,
    url: &str,
) -> Result<Media> {
    if url.is_empty() {
        return Err(StoreError::Validation("url must not be empty".to_string()));
    }

    let media = sqlx::query_as::<_, Media>(
        r#"
        INSERT INTO media (id, media_type, url, post_id)
        VALUES (uuid_generate_v4(), $1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(media_type)
    .bind(url)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(media)
}

/// Find a media item by ID
pub async fn find_media_by_id(pool: &PgPool, media_id: Uuid) -> Result<Option<Media>> {
    let media = sqlx::query_as::<_, Media>("SELECT * FROM media WHERE id = $1")
        .bind(media_id)
        .fetch_optional(pool)
        .await?;

    Ok(media)
}

/// Get all media attached to a post
pub async fn get_media_by_post(pool: &PgPool, post_id: Uuid) -> Result<Vec<Media>> {
    let media = sqlx::query_as::<_, Media>("SELECT * FROM media WHERE post_id = $1")
        .bind(post_id)
        .fetch_all(pool)
        .await?;

    Ok(media)
}

/// Update the URL of a media item
pub async fn update_media_url(pool: &PgPool, media_id: Uuid, url: &str) -> Result<Media> {
    if url.is_empty() {
        return Err(StoreError::Validation("url must not be empty".to_string()));
    }

    let media = sqlx::query_as::<_, Media>(
        r#"
        UPDATE media
        SET url = $1
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(url)
    .bind(media_id)
    .fetch_optional(pool)
    .await?;

    media.ok_or_else(|| StoreError::NotFound(format!("media {}", media_id)))
}

/// Delete a media item
pub async fn delete_media(pool: &PgPool, media_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM media WHERE id = $1")
        .bind(media_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
