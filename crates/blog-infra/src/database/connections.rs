use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::entity::blog_post;

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Process-wide database handle.
///
/// Opened once at startup, shared by every handler through the application
/// state, and closed once at shutdown.
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Connect using the given configuration.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self { main })
    }

    /// Create the `blog_posts` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.main.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(blog_post::Entity);
        table.if_not_exists();

        self.main.execute(backend.build(&table)).await?;
        tracing::debug!("Table `blog_posts` ready");
        Ok(())
    }

    /// Close the pool. Pending handles fail after this.
    pub async fn close(&self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.main.close_by_ref().await
    }
}
