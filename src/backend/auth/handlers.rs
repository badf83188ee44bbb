/**
 * Account Handlers
 *
 * Signup, login, current-user lookup, and account deletion. Deleting an
 * account cascades through every ownership relation: follows in both
 * directions, the word filter, created groups, and authored freets are
 * removed before the user row itself.
 */
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, delete_user, get_user_by_username};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::{follow, freet, group, word_filter};
use crate::shared::responses::{AuthResponse, MessageResponse, UserResponse};

/// Route table for /api/users.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(signup).delete(delete_account))
        .route("/session", post(login).get(current_user))
}

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Usernames are nonempty and contain only letters, digits, and
/// underscores.
fn is_valid_username(username: &str) -> bool {
    !username.is_empty() && username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// POST /api/users - create an account
pub async fn signup(
    State(pool): State<PgPool>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if !is_valid_username(&request.username) {
        return Err(ApiError::validation(
            "Username must be a nonempty alphanumeric string.",
        ));
    }
    if request.password.trim().is_empty() {
        return Err(ApiError::validation("Password must be nonempty."));
    }
    if get_user_by_username(&pool, &request.username).await?.is_some() {
        return Err(ApiError::duplicate("An account with this username already exists."));
    }

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("failed to hash password: {e}")))?;

    let user = create_user(&pool, &request.username, &password_hash)
        .await
        .map_err(|e| {
            ApiError::duplicate_on_conflict(e, "An account with this username already exists.")
        })?;

    let token = token_for(&user.id, &user.username)?;
    tracing::info!("account created: {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Your account was created successfully.".to_string(),
            token,
            user: UserResponse {
                id: user.id.to_string(),
                username: user.username,
            },
        }),
    ))
}

/// POST /api/users/session - log in
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let invalid = || ApiError::forbidden("Invalid username or password.");

    let user = get_user_by_username(&pool, &request.username)
        .await?
        .ok_or_else(invalid)?;

    let matches = bcrypt::verify(&request.password, &user.password_hash).unwrap_or(false);
    if !matches {
        return Err(invalid());
    }

    let token = token_for(&user.id, &user.username)?;

    Ok(Json(AuthResponse {
        message: "You have logged in successfully.".to_string(),
        token,
        user: UserResponse {
            id: user.id.to_string(),
            username: user.username,
        },
    }))
}

/// GET /api/users/session - who am I
pub async fn current_user(user: AuthUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.user_id.to_string(),
        username: user.username,
    })
}

/// DELETE /api/users - delete the signed-in account and everything it owns
pub async fn delete_account(
    State(pool): State<PgPool>,
    user: AuthUser,
) -> Result<Json<MessageResponse>, ApiError> {
    follow::db::delete_all_as_follower(&pool, user.user_id).await?;
    follow::db::delete_all_as_followee(&pool, user.user_id).await?;
    word_filter::db::delete_all_for_user(&pool, user.user_id).await?;
    group::db::delete_all_by_creator(&pool, user.user_id).await?;
    freet::db::delete_all_by_author(&pool, user.user_id).await?;
    delete_user(&pool, user.user_id).await?;

    tracing::info!("account deleted: {}", user.username);

    Ok(Json(MessageResponse {
        message: "Your account has been deleted.".to_string(),
    }))
}

fn token_for(user_id: &uuid::Uuid, username: &str) -> Result<String, ApiError> {
    create_token(*user_id, username)
        .map_err(|e| ApiError::Internal(format!("failed to create session token: {e}")))
}
