/**
 * Follow Validators
 *
 * Ordered per route: nonempty-name first, then user existence (404),
 * then self-follow and relationship-state checks (400).
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{get_user_by_username, User};
use crate::backend::error::ApiError;
use crate::backend::follow::db;

/// Syntactic check: the followee name is present and nonempty.
pub fn valid_followee_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("Provided username must be nonempty."));
    }
    Ok(())
}

/// Existence check: the named user exists (404 otherwise).
pub async fn followee_exists(pool: &PgPool, name: &str) -> Result<User, ApiError> {
    get_user_by_username(pool, name)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("A user with username {name} does not exist.")))
}

/// Relationship check: a user cannot follow themselves.
pub fn not_self_follow(follower_id: Uuid, followee_id: Uuid) -> Result<(), ApiError> {
    if follower_id == followee_id {
        return Err(ApiError::validation("Can not follow yourself."));
    }
    Ok(())
}

/// Relationship check: no (follower, followee) row exists yet.
pub async fn not_already_following(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<(), ApiError> {
    if db::find_pair(pool, follower_id, followee_id).await?.is_some() {
        return Err(ApiError::duplicate("Already following this user."));
    }
    Ok(())
}

/// Relationship check for removal: the pair must already exist.
pub async fn is_following(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<(), ApiError> {
    if db::find_pair(pool, follower_id, followee_id).await?.is_none() {
        return Err(ApiError::validation("You are not following this user."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_blank_followee_name_rejected() {
        assert!(valid_followee_name("alice").is_ok());
        let err = valid_followee_name("   ").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_self_follow_rejected() {
        let id = Uuid::new_v4();
        let err = not_self_follow(id, id).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(not_self_follow(id, Uuid::new_v4()).is_ok());
    }
}
