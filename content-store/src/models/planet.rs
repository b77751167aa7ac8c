use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Planet entity - fan-content reference catalog
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Planet {
    pub id: Uuid,
    pub name: String,
    pub climate: String,
    pub population: i64,
}

/// Join row linking a user to a favorited planet
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlanetFavorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub planet_id: Uuid,
    pub created_at: DateTime<Utc>,
}
