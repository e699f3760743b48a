//! Mapping of submission errors onto HTTP responses.

use crate::error::SubmissionError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// A failed operation, ready to be rendered as an HTTP response.
///
/// Every response body carries a `detail` field. Store failures are rendered
/// with the operation's generic `failure_message`; their internal text never
/// reaches the caller.
#[derive(Debug)]
pub struct ApiError {
    error: SubmissionError,
    failure_message: &'static str,
}

impl ApiError {
    pub fn new(error: SubmissionError, failure_message: &'static str) -> Self {
        Self {
            error,
            failure_message,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match &self.error {
            SubmissionError::Schema(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SubmissionError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmissionError::NotFound(_) => StatusCode::NOT_FOUND,
            SubmissionError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self.error {
            SubmissionError::Schema(errors) => json!({ "detail": errors }),
            SubmissionError::Validation(message) | SubmissionError::NotFound(message) => {
                json!({ "detail": message })
            }
            SubmissionError::Store(_) => json!({ "detail": self.failure_message }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::validation::FieldError;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(error: SubmissionError) -> (StatusCode, Value) {
        let response = ApiError::new(error, "Operation failed").into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_schema_error_is_422_with_field_list() {
        let (status, body) =
            render(SubmissionError::Schema(vec![FieldError::new("email", "bad")])).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["field"], "email");
        assert_eq!(body["detail"][0]["message"], "bad");
    }

    #[tokio::test]
    async fn test_validation_error_is_400() {
        let (status, body) =
            render(SubmissionError::Validation("Budget must be one of: x".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Budget must be one of: x");
    }

    #[tokio::test]
    async fn test_not_found_is_404() {
        let (status, body) = render(SubmissionError::not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Contact submission not found");
    }

    #[tokio::test]
    async fn test_store_error_hides_internal_text() {
        let (status, body) = render(SubmissionError::Store(StoreError::Unavailable(
            "mongo-0.internal:27017 refused".to_string(),
        )))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Operation failed");
        assert!(!body.to_string().contains("mongo-0"));
    }
}
