// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and a response body.
/// Client errors answer with a short plain-text reason, unknown objects with
/// `{"error": "Not found"}`, server failures with a structured JSON body.
#[derive(Error, Debug)]
pub enum HbnbError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Not a JSON")]
    NotAJson,

    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl HbnbError {
    /// Shorthand for a missing object of the given kind
    pub fn not_found(kind: impl std::fmt::Display, id: &str) -> Self {
        HbnbError::NotFound(format!("{} {}", kind, id))
    }
}

/// Convert HbnbError to HTTP response
impl ResponseError for HbnbError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            HbnbError::NotFound(_) => HttpResponse::build(status).json(json!({ "error": "Not found" })),
            HbnbError::NotAJson | HbnbError::MissingField(_) | HbnbError::ValidationError(_) => {
                HttpResponse::build(status)
                    .content_type("text/plain; charset=utf-8")
                    .body(self.to_string())
            }
            HbnbError::StorageError(_) | HbnbError::DatabaseError(_) => {
                let error_code = match self {
                    HbnbError::DatabaseError(_) => "DATABASE_ERROR",
                    _ => "STORAGE_ERROR",
                };

                HttpResponse::build(status).json(json!({
                    "error": {
                        "code": error_code,
                        "message": self.to_string(),
                        "timestamp": chrono::Utc::now().to_rfc3339()
                    }
                }))
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            HbnbError::NotFound(_) => StatusCode::NOT_FOUND,
            HbnbError::NotAJson => StatusCode::BAD_REQUEST,
            HbnbError::MissingField(_) => StatusCode::BAD_REQUEST,
            HbnbError::ValidationError(_) => StatusCode::BAD_REQUEST,
            HbnbError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HbnbError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
