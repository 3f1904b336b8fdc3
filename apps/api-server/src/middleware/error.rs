//! Error handling - maps handler failures to HTTP responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use blog_core::error::{MissingFieldError, RepoError, ValidationError};
use blog_shared::MessageResponse;
use std::fmt;

/// Application-level error type.
///
/// Store failures are logged here and reported to clients as a generic
/// 500 without detail.
#[derive(Debug)]
pub enum AppError {
    /// Required body key absent. Reported as plain text.
    MissingField(String),
    BadRequest(String),
    NotFound,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingField(field) => write!(f, "Missing `{}` in request body", field),
            AppError::BadRequest(msg) => write!(f, "{}", msg),
            AppError::NotFound => write!(f, "Not Found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::MissingField(_) => {
                tracing::error!("{}", self);
                HttpResponse::build(self.status_code())
                    .content_type(ContentType::plaintext())
                    .body(self.to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::error!("{}", msg);
                HttpResponse::build(self.status_code()).json(MessageResponse::new(msg.as_str()))
            }
            AppError::NotFound => {
                HttpResponse::build(self.status_code()).json(MessageResponse::not_found())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::build(self.status_code()).json(MessageResponse::internal_error())
            }
        }
    }
}

impl From<MissingFieldError> for AppError {
    fn from(err: MissingFieldError) -> Self {
        AppError::MissingField(err.field)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField(missing) => missing.into(),
            invalid @ ValidationError::InvalidField { .. } => {
                AppError::BadRequest(invalid.to_string())
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_missing_field_is_plain_text() {
        let resp = AppError::MissingField("title".into()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "Missing `title` in request body");
    }

    #[actix_web::test]
    async fn test_store_errors_are_not_leaked() {
        let err: AppError = RepoError::Query("relation blog_posts does not exist".into()).into();
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let body: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, MessageResponse::internal_error());
    }
}
