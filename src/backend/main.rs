/**
 * Fritter Server Entry Point
 *
 * Loads configuration from the environment, connects to PostgreSQL,
 * and serves the REST API.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = fritter::backend::server::config::Config::from_env()?;
    let pool = fritter::backend::server::config::load_database(&config.database_url).await?;

    let app = fritter::backend::server::create_app(pool);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
