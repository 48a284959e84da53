//! Application error taxonomy and HTTP response mapping.
//!
//! Every failure a caller can observe is one of these variants; each maps to
//! a status class and a flat `{"error": "..."}` JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced by the shorten, redirect, and analytics operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required request field was not provided.
    #[error("This field is required.")]
    MissingField,

    #[error("URL cannot be an empty string.")]
    EmptyUrl,

    #[error("URL length exceeds the maximum limit of 2048 characters.")]
    TooLong,

    #[error("Invalid URL.")]
    InvalidUrl,

    #[error("Invalid date format. Please use 'YYYY-MM-DD HH:MM:SS'.")]
    InvalidDateFormat,

    #[error("Expiration timestamp must be in the future.")]
    ExpirationInPast,

    #[error("This URL is password protected. Please provide a password.")]
    PasswordRequired,

    #[error("Incorrect password.")]
    InvalidPassword,

    #[error("Shortened URL not found.")]
    NotFound,

    /// Unique-constraint violation on `short_code`. Consumed by the shorten
    /// retry loop; only escapes if a caller races past the bounded retries.
    #[error("Short code already exists.")]
    Conflict,

    #[error("This URL has expired.")]
    Expired,

    /// The bounded collision-retry loop ran out of attempts.
    #[error("Failed to generate a unique short code.")]
    GenerationExhausted,

    #[error("Storage error.")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField
            | AppError::EmptyUrl
            | AppError::TooLong
            | AppError::InvalidUrl
            | AppError::InvalidDateFormat
            | AppError::ExpirationInPast => StatusCode::BAD_REQUEST,
            AppError::PasswordRequired | AppError::InvalidPassword => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict => StatusCode::CONFLICT,
            AppError::Expired => StatusCode::GONE,
            AppError::GenerationExhausted | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side causes are logged in full but never leaked to clients.
        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Maps a sqlx error to the application taxonomy, detecting unique-constraint
/// violations on the way.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::Conflict;
        }
    }

    AppError::Storage(e)
}
