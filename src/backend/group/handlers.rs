/**
 * Group HTTP Handlers
 *
 * The list endpoint is the overloaded GET of the API: which query
 * parameter is present selects the query mode, evaluated in declared
 * order (creator, then member, then groupName, then unfiltered). Every
 * other route runs its validator chain in order and then calls the
 * collection.
 */
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::backend::freet::{self, validators as freet_validators};
use crate::backend::group::{db, responses::build_group_response, validators};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::responses::{GroupResponse, GroupUpdatedResponse, MessageResponse};

/// Route table for /api/groups.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_groups).post(create_group))
        .route("/{group_id}", put(rename_group).delete(delete_group))
        .route("/{group_id}/join", put(join_group))
        .route("/{group_id}/leave", put(leave_group))
        .route("/{group_id}/addFreet", put(add_freet_to_group))
        .route(
            "/{group_id}/deleteFreet/{freet_id}",
            put(delete_freet_from_group),
        )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListQuery {
    pub creator: Option<String>,
    pub member: Option<String>,
    pub group_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GroupNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddFreetRequest {
    pub content: String,
    #[serde(default)]
    pub anonymous: bool,
}

/// GET /api/groups with optional ?creator=, ?member=, ?groupName=
pub async fn list_groups(
    State(pool): State<PgPool>,
    Query(query): Query<GroupListQuery>,
) -> Result<Json<Vec<GroupResponse>>, ApiError> {
    // Ordered dispatch over the query parameters.
    let groups = if let Some(ref creator) = query.creator {
        let user = validators::creator_exists(&pool, creator).await?;
        db::find_all_by_creator(&pool, user.id).await?
    } else if let Some(ref member) = query.member {
        let user = validators::member_user_exists(&pool, member).await?;
        db::find_all_by_member(&pool, user.id).await?
    } else if let Some(ref name) = query.group_name {
        db::find_all_by_name(&pool, name).await?
    } else {
        db::find_all(&pool).await?
    };

    Ok(Json(groups.iter().map(build_group_response).collect()))
}

/// POST /api/groups
pub async fn create_group(
    State(pool): State<PgPool>,
    user: AuthUser,
    Json(request): Json<GroupNameRequest>,
) -> Result<(StatusCode, Json<GroupUpdatedResponse>), ApiError> {
    validators::valid_group_name(&request.name)?;

    let group = db::create(&pool, user.user_id, &request.name).await?;
    tracing::debug!("group {} created by {}", group.record.id, user.username);

    Ok((
        StatusCode::CREATED,
        Json(GroupUpdatedResponse {
            message: "Your group was created successfully.".to_string(),
            group: build_group_response(&group),
        }),
    ))
}

/// PUT /api/groups/{groupId} - rename
pub async fn rename_group(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path(group_id): Path<String>,
    Json(request): Json<GroupNameRequest>,
) -> Result<Json<GroupUpdatedResponse>, ApiError> {
    let group = validators::group_exists(&pool, &group_id).await?;
    validators::is_group_creator(&group, user.user_id)?;
    validators::valid_group_name(&request.name)?;

    let group = db::rename(&pool, group.record.id, &request.name)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Json(GroupUpdatedResponse {
        message: "Your group was updated successfully.".to_string(),
        group: build_group_response(&group),
    }))
}

/// DELETE /api/groups/{groupId}
pub async fn delete_group(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path(group_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let group = validators::group_exists(&pool, &group_id).await?;
    validators::is_group_creator(&group, user.user_id)?;

    db::delete_one(&pool, group.record.id).await?;

    Ok(Json(MessageResponse {
        message: "Your group was deleted successfully.".to_string(),
    }))
}

/// PUT /api/groups/{groupId}/join
pub async fn join_group(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path(group_id): Path<String>,
) -> Result<Json<GroupUpdatedResponse>, ApiError> {
    let group = validators::group_exists(&pool, &group_id).await?;
    validators::not_group_member(&pool, group.record.id, user.user_id).await?;

    // The membership primary key arbitrates concurrent joins.
    let group = db::add_member(&pool, group.record.id, user.user_id)
        .await
        .map_err(|e| {
            ApiError::duplicate_on_conflict(e, "You are already a member of this group.")
        })?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Json(GroupUpdatedResponse {
        message: "You have joined the group.".to_string(),
        group: build_group_response(&group),
    }))
}

/// PUT /api/groups/{groupId}/leave
pub async fn leave_group(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path(group_id): Path<String>,
) -> Result<Json<GroupUpdatedResponse>, ApiError> {
    let group = validators::group_exists(&pool, &group_id).await?;
    validators::is_group_member(&pool, group.record.id, user.user_id).await?;

    let group = db::remove_member(&pool, group.record.id, user.user_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Json(GroupUpdatedResponse {
        message: "You have left the group.".to_string(),
        group: build_group_response(&group),
    }))
}

/// PUT /api/groups/{groupId}/addFreet - post a freet into the group
pub async fn add_freet_to_group(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path(group_id): Path<String>,
    Json(request): Json<AddFreetRequest>,
) -> Result<Json<GroupUpdatedResponse>, ApiError> {
    let group = validators::group_exists(&pool, &group_id).await?;
    validators::is_group_member(&pool, group.record.id, user.user_id).await?;
    freet_validators::valid_freet_content(&request.content)?;

    let freet =
        freet::db::create(&pool, user.user_id, &request.content, request.anonymous, true).await?;
    let group = db::add_freet(&pool, group.record.id, freet.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(Json(GroupUpdatedResponse {
        message: "Your freet was added to the group.".to_string(),
        group: build_group_response(&group),
    }))
}

/// PUT /api/groups/{groupId}/deleteFreet/{freetId}
///
/// Removing the reference is synchronized with deleting the freet itself.
pub async fn delete_freet_from_group(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path((group_id, freet_id)): Path<(String, String)>,
) -> Result<Json<GroupUpdatedResponse>, ApiError> {
    let group = validators::group_exists(&pool, &group_id).await?;
    validators::is_group_member(&pool, group.record.id, user.user_id).await?;
    let freet = freet_validators::freet_exists(&pool, &freet_id).await?;
    freet_validators::is_freet_author(&freet, user.user_id)?;
    validators::freet_in_group(&pool, group.record.id, freet.id).await?;

    let group = db::remove_freet(&pool, group.record.id, freet.id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;
    freet::db::delete_one(&pool, freet.id).await?;

    Ok(Json(GroupUpdatedResponse {
        message: "You have deleted the freet.".to_string(),
        group: build_group_response(&group),
    }))
}
