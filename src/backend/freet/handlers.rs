/**
 * Freet HTTP Handlers
 *
 * Each handler runs its validator chain in declared order and only then
 * touches the collection; handlers assume all validators passed and never
 * short-circuit themselves.
 */
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::ApiError;
use crate::backend::freet::{db, responses::build_freet_response, validators};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::responses::{FreetCreatedResponse, FreetResponse, MessageResponse};

/// Route table for /api/freets.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_freets).post(create_freet))
        .route("/{freet_id}", delete(delete_freet))
}

#[derive(Debug, Deserialize)]
pub struct FreetListQuery {
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFreetRequest {
    pub content: String,
    #[serde(default)]
    pub anonymous: bool,
}

/// GET /api/freets and GET /api/freets?author=USERNAME
pub async fn list_freets(
    State(pool): State<PgPool>,
    Query(query): Query<FreetListQuery>,
) -> Result<Json<Vec<FreetResponse>>, ApiError> {
    let freets = match query.author {
        Some(ref username) => {
            let author = get_user_by_username(&pool, username).await?.ok_or_else(|| {
                ApiError::not_found(format!("A user with username {username} does not exist."))
            })?;
            db::find_all_by_author(&pool, author.id).await?
        }
        None => db::find_all(&pool).await?,
    };

    Ok(Json(freets.iter().map(build_freet_response).collect()))
}

/// POST /api/freets
pub async fn create_freet(
    State(pool): State<PgPool>,
    user: AuthUser,
    Json(request): Json<CreateFreetRequest>,
) -> Result<(StatusCode, Json<FreetCreatedResponse>), ApiError> {
    validators::valid_freet_content(&request.content)?;

    let freet = db::create(&pool, user.user_id, &request.content, request.anonymous, false).await?;
    tracing::debug!("freet {} created by {}", freet.id, user.username);

    Ok((
        StatusCode::CREATED,
        Json(FreetCreatedResponse {
            message: "Your freet was created successfully.".to_string(),
            freet: build_freet_response(&freet),
        }),
    ))
}

/// DELETE /api/freets/{freetId}
pub async fn delete_freet(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path(freet_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let freet = validators::freet_exists(&pool, &freet_id).await?;
    validators::is_freet_author(&freet, user.user_id)?;

    db::delete_one(&pool, freet.id).await?;

    Ok(Json(MessageResponse {
        message: "Your freet was deleted successfully.".to_string(),
    }))
}
