//! DTOs for the analytics endpoint and shared access parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters accepted by redirect and analytics requests.
#[derive(Debug, Deserialize)]
pub struct AccessParams {
    /// Required for password-protected links.
    pub password: Option<String>,
}

/// Analytics data for one short link.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub access_count: i64,
    pub logs: Vec<AccessLogInfo>,
}

/// One recorded redirect.
///
/// `ip_address` serializes as an explicit `null` when unknown; the field is
/// part of the wire contract either way.
#[derive(Debug, Serialize)]
pub struct AccessLogInfo {
    pub short_url: String,
    pub access_timestamp: DateTime<Utc>,
    pub ip_address: Option<String>,
}
