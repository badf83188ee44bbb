/**
 * API Route Assembly
 *
 * Each resource owns a flat route table (verb, path, validator chain,
 * handler) in its handlers module; this file mounts them under /api.
 *
 * # Routes
 *
 * - `/api/users` - signup, login, current user, delete account
 * - `/api/freets` - the main feed
 * - `/api/follow` - follower/followee relationships
 * - `/api/groups` - groups, membership, and group freets
 * - `/api/wordFilter` - per-user blocked words
 */
use axum::Router;

use crate::backend::server::state::AppState;
use crate::backend::{auth, follow, freet, group, word_filter};

/// Mount every resource's route table under /api.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .nest("/api/users", auth::handlers::routes())
        .nest("/api/freets", freet::routes())
        .nest("/api/follow", follow::routes())
        .nest("/api/groups", group::routes())
        .nest("/api/wordFilter", word_filter::routes())
}
