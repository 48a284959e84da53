//! Repository trait for redirect access logs.

use crate::domain::entities::{AccessLogEntry, NewAccessLogEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Append-only store interface for redirect access records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessLogRepository: Send + Sync {
    /// Appends one access record for a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn record_access(&self, entry: NewAccessLogEntry) -> Result<AccessLogEntry, AppError>;

    /// Returns all access records for a link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list_for_link(&self, link_id: i64) -> Result<Vec<AccessLogEntry>, AppError>;
}
