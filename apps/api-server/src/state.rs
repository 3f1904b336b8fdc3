//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::{AppConfig, StoreBackend};

#[cfg(feature = "postgres")]
use blog_infra::{DatabaseConfig, DatabaseConnections, PostgresPostRepository};

/// Shared application state.
///
/// Built once at startup; every worker gets a clone of the same handles.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with the configured store.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let state = match config.backend {
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store. Data is lost on restart.");
                Self::in_memory()
            }
            #[cfg(feature = "postgres")]
            StoreBackend::Postgres => {
                let db_config = DatabaseConfig {
                    url: config.database_url().to_string(),
                    max_connections: config.database.max_connections,
                    min_connections: config.database.min_connections,
                };
                let connections = DatabaseConnections::init(&db_config).await?;
                connections.ensure_schema().await?;

                let conn = Arc::new(connections);
                Self {
                    posts: Arc::new(PostgresPostRepository::new(conn.main.clone())),
                    db: Some(conn),
                }
            }
            #[cfg(not(feature = "postgres"))]
            StoreBackend::Postgres => {
                anyhow::bail!("STORE_BACKEND=postgres requires the `postgres` feature")
            }
        };

        tracing::info!(backend = ?config.backend, "Application state initialized");
        Ok(state)
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Release the store connection. Called once after the server stops.
    pub async fn shutdown(&self) {
        #[cfg(feature = "postgres")]
        if let Some(db) = &self.db {
            if let Err(e) = db.close().await {
                tracing::error!("Failed to close database connection: {}", e);
            }
        }
    }
}
