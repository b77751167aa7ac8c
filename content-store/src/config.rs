/// Configuration management for the content store
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Min connections in pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        };

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL environment variable not set")?,
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_max_connections),
            min_connections: std::env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_min_connections),
        };

        Ok(Config { app, database })
    }
}

impl DatabaseConfig {
    /// Build a pool configuration for this database
    pub fn pool_config(&self, service_name: &str) -> db_pool::DbConfig {
        db_pool::DbConfig {
            service_name: service_name.to_string(),
            database_url: self.url.clone(),
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            ..db_pool::DbConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_default_values() {
        std::env::remove_var("APP_ENV");
        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("DB_MIN_CONNECTIONS");
        std::env::set_var("DATABASE_URL", "postgres://test");

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.database.url, "postgres://test");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 5);

        std::env::remove_var("DATABASE_URL");
    }

    #[test]
    #[serial_test::serial]
    fn test_missing_database_url() {
        std::env::remove_var("DATABASE_URL");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial_test::serial]
    fn test_pool_config_carries_sizing() {
        std::env::set_var("DATABASE_URL", "postgres://test");
        std::env::set_var("DB_MAX_CONNECTIONS", "8");
        std::env::set_var("DB_MIN_CONNECTIONS", "2");

        let config = Config::from_env().unwrap();
        let pool_config = config.database.pool_config("content-store");

        assert_eq!(pool_config.service_name, "content-store");
        assert_eq!(pool_config.max_connections, 8);
        assert_eq!(pool_config.min_connections, 2);

        std::env::remove_var("DB_MAX_CONNECTIONS");
        std::env::remove_var("DB_MIN_CONNECTIONS");
        std::env::remove_var("DATABASE_URL");
    }
}
