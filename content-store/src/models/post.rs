use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Post category matching database post_category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "post_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Character,
    Planet,
    Vehicle,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Character => "character",
            Category::Planet => "planet",
            Category::Vehicle => "vehicle",
        }
    }

    /// Parse a category tag; unknown values are rejected
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "character" => Some(Category::Character),
            "planet" => Some(Category::Planet),
            "vehicle" => Some(Category::Vehicle),
            _ => None,
        }
    }
}

/// Post entity - a content item owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for tag in ["character", "planet", "vehicle"] {
            let category = Category::from_str(tag).unwrap();
            assert_eq!(category.as_str(), tag);
        }
    }

    #[test]
    fn test_category_rejects_unknown_values() {
        assert!(Category::from_str("car").is_none());
        assert!(Category::from_str("").is_none());
        assert!(Category::from_str("droid").is_none());
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(Category::from_str("Vehicle"), Some(Category::Vehicle));
    }

    #[test]
    fn test_category_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&Category::Vehicle).unwrap();
        assert_eq!(json, r#""vehicle""#);
    }
}
