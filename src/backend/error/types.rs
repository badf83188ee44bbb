/**
 * API Error Types
 *
 * Every validator and handler in the backend rejects with an `ApiError`.
 * The variants mirror the error taxonomy of the REST surface: validation,
 * duplicate state, oversized input, authorization, missing entities, and
 * unanticipated database failures.
 */
use axum::http::StatusCode;
use thiserror::Error;

/// Backend-wide error type.
///
/// All variants except `Database` carry the exact message the client
/// displays. Database errors are logged server-side and surface as an
/// opaque 500 so internals never leak into responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400)
    #[error("{0}")]
    Validation(String),

    /// Duplicate relationship or state (400)
    #[error("{0}")]
    Duplicate(String),

    /// Input exceeds a length limit (413)
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Actor lacks rights over the target, including signed-out (403)
    #[error("{0}")]
    Forbidden(String),

    /// Referenced entity does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Unanticipated store failure (500)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unexpected non-store failure, e.g. hashing or token creation (500)
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::Duplicate(message.into())
    }

    pub fn too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Duplicate(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the response body's `error` field.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "Internal server error.".to_string(),
            other => other.to_string(),
        }
    }

    /// Map an insert failure to a duplicate error when it was caused by a
    /// unique-constraint violation.
    ///
    /// The unique indexes on follows, group membership, and word filters
    /// are the authoritative duplicate arbiter: the validators' existence
    /// checks can race with a concurrent insert, the indexes cannot.
    pub fn duplicate_on_conflict(err: sqlx::Error, message: impl Into<String>) -> Self {
        if is_unique_violation(&err) {
            Self::Duplicate(message.into())
        } else {
            Self::Database(err)
        }
    }
}

/// Postgres signals a unique-constraint violation with SQLSTATE 23505.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
