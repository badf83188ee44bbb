/**
 * Server Initialization
 *
 * Builds the application from a connected pool: state first, then the
 * router with every resource's route table mounted under /api.
 */
use axum::Router;
use sqlx::PgPool;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application.
pub fn create_app(pool: PgPool) -> Router<()> {
    tracing::info!("Initializing fritter backend server");

    let app_state = AppState::new(pool);
    create_router(app_state)
}
