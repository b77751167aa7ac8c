/// Planet catalog database operations
use crate::error::{Result, StoreError};
use crate::models::{Planet, PlanetFavorite};
use crate::validators::{validate_bounded_text, MAX_LABEL_LEN};
use sqlx::PgPool;
use uuid::Uuid;

/// Optional fields for planet updates
#[derive(Debug, Default)]
pub struct UpdatePlanetFields {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub population: Option<i64>,
}

fn validate_planet_fields(
    name: Option<&str>,
    climate: Option<&str>,
    population: Option<i64>,
) -> Result<()> {
    for (field, value) in [("name", name), ("climate", climate)] {
        if let Some(value) = value {
            if !validate_bounded_text(value, MAX_LABEL_LEN) {
                return Err(StoreError::Validation(format!(
                    "{} must be 1-{} characters",
                    field, MAX_LABEL_LEN
                )));
            }
        }
    }
    if let Some(population) = population {
        if population < 0 {
            return Err(StoreError::Validation(
                "population must not be negative".to_string(),
            ));
        }
    }
    Ok(())
}

/// Add a planet to the catalog
pub async fn create_planet(
    pool: &PgPool,
    name: &str,
    climate: &str,
    population: i64,
) -> Result<Planet> {
    validate_planet_fields(Some(name), Some(climate), Some(population))?;

    let planet = sqlx::query_as::<_, Planet>(
        r#"
        INSERT INTO planets (id, name, climate, population)
        VALUES (uuid_generate_v4(), $1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(climate)
    .bind(population)
    .fetch_one(pool)
    .await?;

    Ok(planet)
}

/// Find a planet by ID
pub async fn find_planet_by_id(pool: &PgPool, planet_id: Uuid) -> Result<Option<Planet>> {
    let planet = sqlx::query_as::<_, Planet>("SELECT * FROM planets WHERE id = $1")
        .bind(planet_id)
        .fetch_optional(pool)
        .await?;

    Ok(planet)
}

/// List the catalog, ordered by name
pub async fn list_planets(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Planet>> {
    let planets = sqlx::query_as::<_, Planet>(
        r#"
        SELECT * FROM planets
        ORDER BY name
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(planets)
}

/// Update catalog fields
pub async fn update_planet(
    pool: &PgPool,
    planet_id: Uuid,
    fields: UpdatePlanetFields,
) -> Result<Planet> {
    validate_planet_fields(
        fields.name.as_deref(),
        fields.climate.as_deref(),
        fields.population,
    )?;

    let planet = sqlx::query_as::<_, Planet>(
        r#"
        UPDATE planets
        SET name = COALESCE($1, name),
            climate = COALESCE($2, climate),
            population = COALESCE($3, population)
        WHERE id = $4
        RETURNING *
        "#,
    )
    .bind(fields.name)
    .bind(fields.climate)
    .bind(fields.population)
    .bind(planet_id)
    .fetch_optional(pool)
    .await?;

    planet.ok_or_else(|| StoreError::NotFound(format!("planet {}", planet_id)))
}

/// Delete a planet
///
/// Fails while favorite rows still reference it.
pub async fn delete_planet(pool: &PgPool, planet_id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM planets WHERE id = $1")
        .bind(planet_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Mark a planet as a user's favorite (idempotent)
pub async fn add_planet_favorite(
    pool: &PgPool,
    user_id: Uuid,
    planet_id: Uuid,
) -> Result<PlanetFavorite> {
    let favorite = sqlx::query_as::<_, PlanetFavorite>(
        r#"
        INSERT INTO planet_favorites (id, user_id, planet_id, created_at)
        VALUES (uuid_generate_v4(), $1, $2, NOW())
        ON CONFLICT (user_id, planet_id) DO UPDATE
        SET user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(planet_id)
    .fetch_one(pool)
    .await?;

    Ok(favorite)
}

/// Remove a planet favorite
pub async fn remove_planet_favorite(
    pool: &PgPool,
    user_id: Uuid,
    planet_id: Uuid,
) -> Result<bool> {
    let result = sqlx::query("DELETE FROM planet_favorites WHERE user_id = $1 AND planet_id = $2")
        .bind(user_id)
        .bind(planet_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Get the planets a user has favorited, most recent first
pub async fn get_user_planet_favorites(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Planet>> {
    let planets = sqlx::query_as::<_, Planet>(
        r#"
        SELECT p.id, p.name, p.climate, p.population
        FROM planet_favorites pf
        JOIN planets p ON pf.planet_id = p.id
        WHERE pf.user_id = $1
        ORDER BY pf.created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(planets)
}

/// Get favorite count for a planet
pub async fn count_planet_favorites(pool: &PgPool, planet_id: Uuid) -> Result<i64> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM planet_favorites WHERE planet_id = $1")
            .bind(planet_id)
            .fetch_one(pool)
            .await?;

    Ok(count)
}
