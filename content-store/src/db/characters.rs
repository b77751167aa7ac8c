/// Character catalog database operations
use crate::error::{Result, StoreError};
use crate::models::{Character, CharacterFavorite};
use crate::validators::{validate_bounded_text, MAX_LABEL_LEN};
use sqlx::PgPool;
use uuid::Uuid;

/// Optional fields for character updates
#[derive(Debug, Default)]
pub struct UpdateCharacterFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub homeworld: Option<String>,
    pub species: Option<String>,
}

fn validate_character_fields(
    name: Option<&str>,
    description: Option<&str>,
    homeworld: Option<&str>,
    species: Option<&str>,
) -> Result<()> {
    for (field, value) in [("name", name), ("homeworld", homeworld), ("species", species)] {
        if let Some(value) = value {
            if !validate_bounded_text(value, MAX_LABEL_LEN) {
                return Err(StoreError::Validation(format!(
                    "{} must be 1-{} characters",
                    field, MAX_LABEL_LEN
                )));
            }
        }
    }
    if let Some(description) = description {
        if description.is_empty() {
            return Err(StoreError::Validation(
                "description must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

/// Add a character to the catalog
pub async fn create_character(
    pool: &PgPool,
    name: &str,
    description: &str,
    homeworld: &str,
    species: &str,
) -> Result<Character> {
    validate_character_fields(
        Some(name),
        Some(description),
        Some(homeworld),
        Some(species),
    )?;

    let character = sqlx::query_as::<_, Character>(
        r#"
        INSERT INTO characters (id, name, description, homeworld, species)
        VALUES (uuid_generate_v4(), $1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(homeworld)
    .bind(species)
    .fetch_one(pool)
    .await?;

    Ok(character)
}

/// Find a character by ID
pub async fn find_character_by_id(
    pool: &PgPool,
    character_id: Uuid,
) -> Result<Option<Character>> {
    let character = sqlx::query_as::<_, Character>("SELECT * FROM characters WHERE id = $1")
        .bind(character_id)
        .fetch_optional(pool)
        .await?;

    Ok(character)
}

/// List the catalog, ordered by name
pub async fn list_characters(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Character>> {
    let characters = sqlx::query_as::<_, Character>(
        r#"
        SELECT * FROM characters
        ORDER BY name
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(characters)
}

/// Update catalog fields
pub async fn update_character(
    pool: &PgPool,
    character_id: Uuid,
    fields: UpdateCharacterFields,
) -> Result<Character> {
    validate_character_fields(
        fields.name.as_deref(),
        fields.description.as_deref(),
        fields.homeworld.as_deref(),
        fields.species.as_deref(),
    )?;

    let character = sqlx::query_as::<_, Character>(
        r#"
        UPDATE characters
        SET name = COALESCE($1, name),
            description = COALESCE($2, description),
            homeworld = COALESCE($3, homeworld),
            species = COALESCE($4, species)
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(fields.name)
    .bind(fields.description)
    .bind(fields.homeworld)
    .bind(fields.species)
    .bind(character_id)
    .fetch_optional(pool)
    .await?;

    character.ok_or_else(|| StoreError::NotFound(format!("character {}", character_id)))
}

/// Delete a character
///
/// Fails while favorite rows still reference it.
pub async fn delete_character(pool: &PgPool, character_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM characters WHERE id = $1")
        .bind(character_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Mark a character as a user's favorite (idempotent)
pub async fn add_character_favorite(
    pool: &PgPool,
    user_id: Uuid,
    character_id: Uuid,
) -> Result<CharacterFavorite> {
    let favorite = sqlx::query_as::<_, CharacterFavorite>(
        r#"
        INSERT INTO character_favorites (id, user_id, character_id, created_at)
        VALUES (uuid_generate_v4(), $1, $2, NOW())
        ON CONFLICT (user_id, character_id) DO UPDATE
        SET user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(character_id)
    .fetch_one(pool)
    .await?;

    Ok(favorite)
}

/// Remove a character favorite
pub async fn remove_character_favorite(
    pool: &PgPool,
    user_id: Uuid,
    character_id: Uuid,
) -> Result<bool> {
    let result =
        sqlx::query("DELETE FROM character_favorites WHERE user_id = $1 AND character_id = $2")
            .bind(user_id)
            .bind(character_id)
            .execute(pool)
            .await?;

    Ok(result.rows_affected() > 0)
}

/// Get the characters a user has favorited, most recent first
pub async fn get_user_character_favorites(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Character>> {
    let characters = sqlx::query_as::<_, Character>(
        r#"
        SELECT c.id, c.name, c.description, c.homeworld, c.species
        FROM character_favorites cf
        JOIN characters c ON cf.character_id = c.id
        WHERE cf.user_id = $1
        ORDER BY cf.created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(characters)
}

/// Get favorite count for a character
pub async fn count_character_favorites(pool: &PgPool, character_id: Uuid) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM character_favorites WHERE character_id = $1")
            .bind(character_id)
            .fetch_one(pool)
            .await?;

    Ok(count)
}
