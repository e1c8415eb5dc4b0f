use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                json!({
                    "error": "Internal Server Error",
                    "details": self.to_string()
                })
            }
            _ => json!({ "error": self.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(
            AppError::Validation("bad month".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Employee not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Forbidden("Admin only".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn persistence_errors_carry_details() {
        let resp = AppError::Database(sqlx::Error::PoolTimedOut).error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["error"], "Internal Server Error");
        assert!(value["details"].as_str().unwrap().starts_with("Database error"));
    }

    #[actix_web::test]
    async fn client_errors_only_expose_message() {
        let resp = AppError::Validation("Invalid month format. Use YYYY-MM.".into()).error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value, json!({ "error": "Invalid month format. Use YYYY-MM." }));
    }
}
