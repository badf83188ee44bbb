/**
 * Word Filter Validators
 *
 * The add chain checks duplicate state first, then blankness, then
 * length - the declared order of the original surface, preserved as-is.
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::word_filter::db;

pub const MAX_WORD_LENGTH: usize = 30;

/// Syntactic checks: not blank after trimming (400), at most 30
/// characters (413).
pub fn well_formed_word(word: &str) -> Result<(), ApiError> {
    if word.trim().is_empty() {
        return Err(ApiError::validation(
            "Word must be at least one character long.",
        ));
    }
    if word.chars().count() > MAX_WORD_LENGTH {
        return Err(ApiError::too_large(
            "Word must be no more than 30 characters.",
        ));
    }
    Ok(())
}

/// Full add-word chain: not already filtered (400), then the syntactic
/// checks.
pub async fn valid_word(pool: &PgPool, user_id: Uuid, word: &str) -> Result<(), ApiError> {
    if db::find_word(pool, user_id, word).await?.is_some() {
        return Err(ApiError::duplicate("Word is already in your word filter"));
    }
    well_formed_word(word)
}

/// Removal check: the word must be present.
pub async fn word_in_filter(pool: &PgPool, user_id: Uuid, word: &str) -> Result<(), ApiError> {
    if db::find_word(pool, user_id, word).await?.is_none() {
        return Err(ApiError::validation("Word is not in your word filter"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_blank_word_rejected() {
        let err = well_formed_word("   ").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Word must be at least one character long.");
    }

    #[test]
    fn test_oversized_word_rejected_with_413() {
        let long = "w".repeat(MAX_WORD_LENGTH + 1);
        let err = well_formed_word(&long).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_word_at_limit_accepted() {
        assert!(well_formed_word(&"w".repeat(MAX_WORD_LENGTH)).is_ok());
        assert!(well_formed_word("spoilers").is_ok());
    }
}
