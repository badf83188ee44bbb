/**
 * Application State Management
 *
 * `AppState` is the central state container shared across all request
 * handlers. There is no in-process cache or coordination here: each
 * request runs its validator chain and handler as one suspend/resume
 * sequence against the pool, and the store's per-row atomicity (plus the
 * schema's unique indexes) is the only cross-request safety net.
 */
use axum::extract::FromRef;
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Lets handlers take `State<PgPool>` directly instead of the whole state.
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> PgPool {
        state.pool.clone()
    }
}
