use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::i18n::LanguageRegistry;
use crate::schema::ValidationErrors;

/// Failures raised by a `Storage` backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage lock poisoned: {0}")]
    Poisoned(&'static str),

    #[error("Constraint violated: {0}")]
    Constraint(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Missing or invalid API key")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(#[from] StoreError),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation error",
                    "errors": errors,
                })),
            )
                .into_response(),
            ApiError::UnsupportedLanguage(_) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": format!(
                        "Invalid language parameter. Supported languages: {}",
                        LanguageRegistry::get().supported_codes()
                    ),
                })),
            )
                .into_response(),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Unauthorized" })),
            )
                .into_response(),
            ApiError::Internal(e) => {
                // Detail stays in the logs
                error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldError;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn test_validation_response() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new("email", "Required"));

        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Validation error");
        assert_eq!(body["errors"][0]["field"], "email");
        assert_eq!(body["errors"][0]["message"], "Required");
    }

    #[tokio::test]
    async fn test_unsupported_language_response() {
        let response = ApiError::UnsupportedLanguage("fr".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body["message"],
            "Invalid language parameter. Supported languages: en, vi"
        );
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let err = ApiError::from(StoreError::Constraint("accounts_username_key".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "message": "Internal server error" }));
    }

    #[tokio::test]
    async fn test_unauthorized_response() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
