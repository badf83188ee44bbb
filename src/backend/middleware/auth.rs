/**
 * Authentication Middleware
 *
 * `AuthUser` is the extractor protected handlers take as their first
 * validator: it reads the bearer token from the Authorization header,
 * verifies it, and confirms the user row still exists. Rejection is a
 * 403 with the same message for every failure mode, matching the
 * signed-out behavior of the REST surface.
 */
use axum::{extract::FromRef, extract::FromRequestParts, http::header::AUTHORIZATION};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;

const NOT_LOGGED_IN: &str = "You must be logged in to complete this action.";

/// Verified identity of the signed-in user making the request.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    PgPool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::forbidden(NOT_LOGGED_IN))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::forbidden(NOT_LOGGED_IN))?;

        let claims = verify_token(token).map_err(|e| {
            tracing::warn!("Invalid session token: {:?}", e);
            ApiError::forbidden(NOT_LOGGED_IN)
        })?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::forbidden(NOT_LOGGED_IN))?;

        // The token may outlive the account; confirm the row still exists.
        let pool = PgPool::from_ref(state);
        let user = get_user_by_id(&pool, user_id)
            .await?
            .ok_or_else(|| ApiError::forbidden(NOT_LOGGED_IN))?;

        Ok(AuthUser {
            user_id: user.id,
            username: user.username,
        })
    }
}
