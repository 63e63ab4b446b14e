use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    DuplicateUsername,
    InvalidCredentials,
    BadRequest(String),
    Storage(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateUsername => write!(f, "username already exists"),
            AppError::InvalidCredentials => write!(f, "invalid credentials"),
            AppError::BadRequest(msg) => write!(f, "bad request: {msg}"),
            AppError::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::DuplicateUsername => {
                tracing::warn!(error_type = "duplicate_username", "Responding with 400");
                (StatusCode::BAD_REQUEST, "Username already exists".to_string())
            }
            AppError::InvalidCredentials => {
                tracing::warn!(error_type = "invalid_credentials", "Responding with 401");
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::warn!(error_type = "bad_request", message = %msg, "Responding with 400");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Storage(e) => {
                tracing::error!(error_type = "storage", error = %e, "Responding with 500");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Storage(e)
    }
}
