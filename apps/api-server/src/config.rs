//! Application configuration loaded from environment variables.

use std::env;

use tipline_core::services::DEFAULT_PAGE_SIZE;
use tipline_infra::JwtConfig;
use tipline_infra::database::DatabaseConfig;
use uuid::Uuid;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub page_size: usize,
    pub jwt: JwtConfig,
    /// Admins for the in-memory role directory (no database configured).
    pub admin_user_ids: Vec<Uuid>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            page_size: env::var("TIPS_PAGE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&size| size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            jwt: JwtConfig::from_env(),
            admin_user_ids: env::var("ADMIN_USER_IDS")
                .map(|v| parse_user_ids(&v))
                .unwrap_or_default(),
        }
    }
}

/// Parse a comma-separated list of UUIDs, skipping invalid entries.
fn parse_user_ids(value: &str) -> Vec<Uuid> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match Uuid::parse_str(s) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(entry = s, error = %e, "Ignoring invalid ADMIN_USER_IDS entry");
                None
            }
        })
        .collect()
}
