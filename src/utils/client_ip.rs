//! Client IP extraction from the connection and forwarding headers.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolves the client IP for access logging.
///
/// Uses the socket peer address unless `behind_proxy` is set, in which case
/// `X-Forwarded-For` (first hop) and `X-Real-IP` take precedence. Only enable
/// `behind_proxy` behind a trusted reverse proxy; the headers are otherwise
/// caller-controlled.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> Option<String> {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return Some(forwarded.to_string());
        }

        if let Some(real_ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            return Some(real_ip.to_string());
        }
    }

    Some(peer.ip().to_string())
}
