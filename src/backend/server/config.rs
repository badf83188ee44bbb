/**
 * Server Configuration
 *
 * Configuration is loaded from environment variables. Unlike optional
 * services, the database is required here: every route reads or writes
 * the store, so a server without a pool would serve nothing but errors.
 * Configuration failures are therefore fatal at startup.
 */
use sqlx::PgPool;
use thiserror::Error;

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string (`DATABASE_URL`)
    pub database_url: String,
    /// TCP port to listen on (`SERVER_PORT`, default 3000)
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
    #[error("invalid SERVER_PORT: {0}")]
    InvalidPort(String),
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("DATABASE_URL").ok(),
            std::env::var("SERVER_PORT").ok(),
        )
    }

    fn from_vars(
        database_url: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url.ok_or(ConfigError::MissingDatabaseUrl)?;

        let port = match port {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        Ok(Self { database_url, port })
    }
}

/// Connect to PostgreSQL and bring the schema up to date.
pub async fn load_database(database_url: &str) -> Result<PgPool, ConfigError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url)
        .await
        .map_err(ConfigError::Connect)?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
