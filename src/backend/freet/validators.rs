/**
 * Freet Validators
 *
 * Ordered request predicates: cheap syntactic checks first, then
 * existence, then authorization. Handlers compose these with `?`, so the
 * first rejection short-circuits the chain.
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::freet::db::{self, PopulatedFreet};

pub const MAX_CONTENT_LENGTH: usize = 140;

/// Content check: not blank after trimming, at most 140 characters.
pub fn valid_freet_content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::validation(
            "Freet content must be at least one character long.",
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(ApiError::too_large(
            "Freet content must be no more than 140 characters.",
        ));
    }
    Ok(())
}

/// Existence check: the freet id is syntactically valid and refers to a
/// stored freet (404 otherwise).
pub async fn freet_exists(pool: &PgPool, freet_id: &str) -> Result<PopulatedFreet, ApiError> {
    let not_found =
        || ApiError::not_found(format!("Freet with freet ID {freet_id} does not exist."));

    let id = Uuid::parse_str(freet_id).map_err(|_| not_found())?;
    db::find_one(pool, id).await?.ok_or_else(not_found)
}

/// Authorization check: the acting user wrote this freet.
pub fn is_freet_author(freet: &PopulatedFreet, user_id: Uuid) -> Result<(), ApiError> {
    if freet.author_id != user_id {
        return Err(ApiError::forbidden("Cannot modify other users' freets."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Utc;

    fn sample_freet(author_id: Uuid) -> PopulatedFreet {
        PopulatedFreet {
            id: Uuid::new_v4(),
            author_id,
            author_username: "alice".to_string(),
            content: "Hello".to_string(),
            anonymous: false,
            in_group: false,
            date_created: Utc::now(),
            date_modified: Utc::now(),
        }
    }

    #[test]
    fn test_blank_content_rejected() {
        let err = valid_freet_content("   ").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_oversized_content_rejected() {
        let long = "x".repeat(MAX_CONTENT_LENGTH + 1);
        let err = valid_freet_content(&long).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_content_at_limit_accepted() {
        let at_limit = "x".repeat(MAX_CONTENT_LENGTH);
        assert!(valid_freet_content(&at_limit).is_ok());
    }

    #[test]
    fn test_author_check() {
        let author = Uuid::new_v4();
        let freet = sample_freet(author);
        assert!(is_freet_author(&freet, author).is_ok());

        let err = is_freet_author(&freet, Uuid::new_v4()).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }
}
