/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return
 * `Result<Json<T>, ApiError>` directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Group name must be at least one character long."
 * }
 * ```
 */
use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Database(err) => tracing::error!("unhandled database error: {:?}", err),
            ApiError::Internal(msg) => tracing::error!("internal error: {}", msg),
            _ => {}
        }
        let body = serde_json::json!({ "error": self.message() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_error_response_status() {
        let response = ApiError::not_found("Group does not exist.").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_payload_too_large_status() {
        let response =
            ApiError::too_large("Word must be no more than 30 characters.").into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
