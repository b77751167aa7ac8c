use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Character entity - fan-content reference catalog
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub homeworld: String,
    pub species: String,
}

/// Join row linking a user to a favorited character
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CharacterFavorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub character_id: Uuid,
    pub created_at: DateTime<Utc>,
}
