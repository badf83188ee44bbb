/**
 * Word Filter HTTP Handlers
 *
 * Every route here requires a signed-in user; the filter is private to
 * its owner, so there is no cross-user listing.
 */
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::word_filter::{db, responses::build_word_filter_response, validators};
use crate::shared::responses::{MessageResponse, WordFilterCreatedResponse, WordFilterResponse};

/// Route table for /api/wordFilter.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_words).post(create_word))
        .route("/{word}", delete(delete_word))
}

#[derive(Debug, Deserialize)]
pub struct AddWordRequest {
    pub word: String,
}

/// GET /api/wordFilter
pub async fn list_words(
    State(pool): State<PgPool>,
    user: AuthUser,
) -> Result<Json<Vec<WordFilterResponse>>, ApiError> {
    let words = db::find_all_for_user(&pool, user.user_id).await?;
    Ok(Json(words.iter().map(build_word_filter_response).collect()))
}

/// POST /api/wordFilter
pub async fn create_word(
    State(pool): State<PgPool>,
    user: AuthUser,
    Json(request): Json<AddWordRequest>,
) -> Result<(StatusCode, Json<WordFilterCreatedResponse>), ApiError> {
    validators::valid_word(&pool, user.user_id, &request.word).await?;

    // The (user, word) unique index arbitrates concurrent adds.
    let filter = db::create(&pool, user.user_id, &request.word)
        .await
        .map_err(|e| ApiError::duplicate_on_conflict(e, "Word is already in your word filter"))?;

    Ok((
        StatusCode::CREATED,
        Json(WordFilterCreatedResponse {
            message: "You have added a word successfully.".to_string(),
            word_filter: build_word_filter_response(&filter),
        }),
    ))
}

/// DELETE /api/wordFilter/{word}
pub async fn delete_word(
    State(pool): State<PgPool>,
    user: AuthUser,
    Path(word): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    validators::word_in_filter(&pool, user.user_id, &word).await?;

    db::delete_word(&pool, user.user_id, &word).await?;

    Ok(Json(MessageResponse {
        message: "You have removed a word successfully.".to_string(),
    }))
}
