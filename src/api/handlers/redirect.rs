//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::HeaderMap,
    response::Redirect,
};
use std::net::SocketAddr;

use crate::api::dto::analytics::AccessParams;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}?password=...`
///
/// A successful resolution increments the link's access counter and records
/// an access log entry (with the caller's IP when known) before the 307
/// response is produced.
///
/// # Errors
///
/// 404 for an unknown code, 401 for a missing or wrong password on a
/// protected link, 410 once the link has expired, 500 when the counter or
/// log write fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    Query(params): Query<AccessParams>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let ip = client_ip(&headers, addr, state.behind_proxy);

    let target = state
        .redirect_service
        .resolve(&code, params.password.as_deref(), ip)
        .await?;

    Ok(Redirect::temporary(&target))
}
