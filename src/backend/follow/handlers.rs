/**
 * Follow HTTP Handlers
 *
 * The list endpoint dispatches on which query parameter is present
 * (followee, then follower), evaluated in declared order - the explicit
 * form of overloaded-GET dispatch used across the API.
 */
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::backend::follow::{db, responses::build_follow_response, validators};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::responses::{FollowCreatedResponse, FollowResponse, MessageResponse};

/// Route table for /api/follow.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_follows).post(create_follow))
        .route("/{followee_name}", delete(delete_follow))
}

#[derive(Debug, Deserialize)]
pub struct FollowListQuery {
    pub followee: Option<String>,
    pub follower: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFollowRequest {
    pub followee_name: String,
}

/// GET /api/follow?followee=USERNAME - list a user's followers
/// GET /api/follow?follower=USERNAME - list who a user follows
pub async fn list_follows(
    State(pool): State<PgPool>,
    Query(query): Query<FollowListQuery>,
) -> Result<Json<Vec<FollowResponse>>, ApiError> {
    let follows = if let Some(ref followee_name) = query.followee {
        let followee = validators::followee_exists(&pool, followee_name).await?;
        db::find_followers_of(&pool, followee.id).await?
    } else if let Some(ref follower_name) = query.follower {
        let follower = validators::followee_exists(&pool, follower_name).await?;
        db::find_followees_of(&pool, follower.id).await?
    } else {
        return Err(ApiError::validation(
            "Provided follower or followee username must be nonempty.",
        ));
    };

    Ok(Json(follows.iter().map(build_follow_response).collect()))
}

/// POST /api/follow
pub async fn create_follow(
    State(pool): State<PgPool>,
    user: AuthUser,
    Json(request): Json<CreateFollowRequest>,
) -> Result<(StatusCode, Json<FollowCreatedResponse>), ApiError> {
    validators::valid_followee_name(&request.followee_name)?;
    let followee = validators::followee_exists(&pool, &request.followee_name).await?;
    validators::not_self_follow(user.user_id, followee.id)?;
    validators::not_already_following(&pool, user.user_id, followee.id).await?;

    // The unique index is the authoritative duplicate check; a concurrent
    // follow that slips past the validator surfaces as the same 400.
    let follow = db::create(&pool, user.user_id, followee.id)
        .await
        .map_err(|e| ApiError::duplicate_on_conflict(e, "Already following this user."))?;

    Ok((
        StatusCode::CREATED,
        Json(FollowCreatedResponse {
            message: "You have followed successfully.".to_string(),
            follow: build_follow_response(&follow),
        }),
    ))
}

/// DELETE /api/follow/{followeeName}
pub async fn delete_follow(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path(followee_name): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    validators::valid_followee_name(&followee_name)?;
    let followee = validators::followee_exists(&pool, &followee_name).await?;
    validators::is_following(&pool, user.user_id, followee.id).await?;

    db::delete_pair(&pool, user.user_id, followee.id).await?;

    Ok(Json(MessageResponse {
        message: "You have unfollowed successfully.".to_string(),
    }))
}
