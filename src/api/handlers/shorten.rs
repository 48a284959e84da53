//! Handler for the shorten endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/page",
///   "expiration_timestamp": "2030-01-01 10:00:00",  // optional
///   "password": "secret"                             // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "shortened_url": "http://localhost:3000/ab12cd34/",
///   "expiration_timestamp": "2030-01-01T04:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// 400 on validation failures (missing/blank/overlong/invalid URL, malformed
/// or past expiration), 500 when persistence or code generation fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state
        .shorten_service
        .shorten(payload.url, payload.expiration_timestamp, payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            shortened_url: outcome.short_url,
            expiration_timestamp: outcome.expires_at,
        }),
    ))
}
