//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/bloggingapp";
const DEFAULT_TEST_DATABASE_URL: &str = "postgres://localhost/test-bloggingapp";

/// Which store implementation backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// Database settings.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub test_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: StoreBackend,
    /// Connect to `test_url` instead of `url` (`APP_ENV=test`).
    pub use_test_database: bool,
    pub database: DatabaseSettings,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; missing or unparsable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend = match lookup("STORE_BACKEND").map(|v| v.to_lowercase()) {
            Some(v) if v == "memory" => StoreBackend::Memory,
            _ => StoreBackend::Postgres,
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT").unwrap_or(8081),
            backend,
            use_test_database: lookup("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("test")),
            database: DatabaseSettings {
                url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                test_url: lookup("TEST_DATABASE_URL")
                    .unwrap_or_else(|| DEFAULT_TEST_DATABASE_URL.to_string()),
                max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(100),
                min_connections: parse_var(&lookup, "DB_MIN_CONNECTIONS").unwrap_or(10),
            },
        }
    }

    /// URL of the database this process should connect to.
    pub fn database_url(&self) -> &str {
        if self.use_test_database {
            &self.database.test_url
        } else {
            &self.database.url
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.parse().ok())
}
