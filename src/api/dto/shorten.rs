//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// All fields are optional at the wire level; the service reports a missing
/// `url` as part of its ordered validation rather than a deserialization
/// failure.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten (absolute, with a host, ≤2048 chars).
    pub url: Option<String>,

    /// Optional expiry in `YYYY-MM-DD HH:MM:SS`, interpreted in the
    /// configured fixed timezone offset. Defaults to 24 hours from now.
    pub expiration_timestamp: Option<String>,

    /// Any non-empty value password-protects the link.
    pub password: Option<String>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortened_url: String,
    pub expiration_timestamp: DateTime<Utc>,
}
