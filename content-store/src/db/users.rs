/// User database operations
use crate::error::{Result, StoreError};
use crate::models::User;
use crate::validators::{validate_bounded_text, validate_email, MAX_NAME_LEN, MAX_USERNAME_LEN};
use sqlx::PgPool;
use uuid::Uuid;

/// Optional fields for profile updates
#[derive(Debug, Default)]
pub struct UpdateUserFields {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

fn validate_profile_fields(
    username: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<()> {
    if let Some(username) = username {
        if !validate_bounded_text(username, MAX_USERNAME_LEN) {
            return Err(StoreError::Validation(format!(
                "username must be 1-{} characters",
                MAX_USERNAME_LEN
            )));
        }
    }
    for (field, value) in [("first_name", first_name), ("last_name", last_name)] {
        if let Some(value) = value {
            if !validate_bounded_text(value, MAX_NAME_LEN) {
                return Err(StoreError::Validation(format!(
                    "{} must be 1-{} characters",
                    field, MAX_NAME_LEN
                )));
            }
        }
    }
    Ok(())
}

/// Create a new user account (active by default)
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User> {
    validate_profile_fields(Some(username), Some(first_name), Some(last_name))?;
    if !validate_email(email) {
        return Err(StoreError::Validation(format!("invalid email: {}", email)));
    }
    if password_hash.is_empty() {
        return Err(StoreError::Validation(
            "password hash must not be empty".to_string(),
        ));
    }

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, first_name, last_name, email, password_hash, is_active, created_at, updated_at)
        VALUES (uuid_generate_v4(), $1, $2, $3, $4, $5, true, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(username)
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Find a user by ID
pub async fn find_user_by_id(pool: &PgPool, user_id: Uuid) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Find a user by email
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Update profile fields, refreshing the update timestamp
pub async fn update_user_profile(
    pool: &PgPool,
    user_id: Uuid,
    fields: UpdateUserFields,
) -> Result<User> {
    validate_profile_fields(
        fields.username.as_deref(),
        fields.first_name.as_deref(),
        fields.last_name.as_deref(),
    )?;

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = COALESCE($1, username),
            first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            updated_at = NOW()
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(fields.username)
    .bind(fields.first_name)
    .bind(fields.last_name)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    user.ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))
}

/// Enable or disable an account, refreshing the update timestamp
pub async fn set_user_active(pool: &PgPool, user_id: Uuid, is_active: bool) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET is_active = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING *
        "#,
    )
    .bind(is_active)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    user.ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))
}

/// Delete a user
///
/// Fails while posts, comments, or favorites still reference the
/// account; dependents must be removed first.
pub async fn delete_user(pool: &PgPool, user_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Count registered users
pub async fn count_users(pool: &PgPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
