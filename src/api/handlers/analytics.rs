//! Handler for link analytics.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::api::dto::analytics::{AccessLogInfo, AccessParams, AnalyticsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns access analytics for a short link.
///
/// # Endpoint
///
/// `GET /analytics/{code}?password=...`
///
/// The same password gate as the redirect applies, but expired links remain
/// readable: analytics outlive expiry.
///
/// # Response
///
/// ```json
/// {
///   "access_count": 2,
///   "logs": [
///     {
///       "short_url": "http://localhost:3000/ab12cd34/",
///       "access_timestamp": "2030-01-01T04:30:00Z",
///       "ip_address": "203.0.113.9"
///     }
///   ]
/// }
/// ```
pub async fn analytics_handler(
    Path(code): Path<String>,
    Query(params): Query<AccessParams>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state
        .analytics_service
        .stats(&code, params.password.as_deref())
        .await?;

    let logs = analytics
        .entries
        .into_iter()
        .map(|entry| AccessLogInfo {
            short_url: analytics.short_url.clone(),
            access_timestamp: entry.accessed_at,
            ip_address: entry.client_ip,
        })
        .collect();

    Ok(Json(AnalyticsResponse {
        access_count: analytics.access_count,
        logs,
    }))
}
