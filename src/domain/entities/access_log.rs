//! Access log entity recording a single successful redirect.

use chrono::{DateTime, Utc};

/// One successful redirect through a shortened link.
///
/// Append-only: entries are never mutated or deleted by the service, and are
/// cascade-removed with their owning link.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub id: i64,
    pub link_id: i64,
    pub accessed_at: DateTime<Utc>,
    /// Absent when the caller's address is unknown.
    pub client_ip: Option<String>,
}

/// Input data for recording a redirect. The store sets the timestamp.
#[derive(Debug, Clone)]
pub struct NewAccessLogEntry {
    pub link_id: i64,
    pub client_ip: Option<String>,
}
