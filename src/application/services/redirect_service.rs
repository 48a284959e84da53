//! Redirect resolution: lookup, access control, and access accounting.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::NewAccessLogEntry;
use crate::domain::repositories::{AccessLogRepository, LinkRepository};
use crate::error::AppError;

/// Service resolving a short code to its redirect target.
///
/// A successful resolution increments the link's access counter and appends
/// an access log entry; both writes must land before the caller gets the
/// target, so a failed write surfaces as a storage error instead of an
/// unaccounted redirect.
pub struct RedirectService {
    links: Arc<dyn LinkRepository>,
    access_logs: Arc<dyn AccessLogRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(links: Arc<dyn LinkRepository>, access_logs: Arc<dyn AccessLogRepository>) -> Self {
        Self { links, access_logs }
    }

    /// Resolves a short code, returning the original URL to redirect to.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingField`] - empty code (a routing defect)
    /// - [`AppError::NotFound`] - unknown code
    /// - [`AppError::PasswordRequired`] / [`AppError::InvalidPassword`] -
    ///   password gate failures, checked before expiry
    /// - [`AppError::Expired`] - expiry strictly in the past; the counter is
    ///   not incremented and no log entry is written
    /// - [`AppError::Storage`] - counter or log write failed
    pub async fn resolve(
        &self,
        code: &str,
        password: Option<&str>,
        client_ip: Option<String>,
    ) -> Result<String, AppError> {
        if code.is_empty() {
            return Err(AppError::MissingField);
        }

        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        link.authorize(password)?;

        if link.is_expired(Utc::now()) {
            return Err(AppError::Expired);
        }

        self.links.increment_access_count(link.id).await?;
        self.access_logs
            .record_access(NewAccessLogEntry {
                link_id: link.id,
                client_ip,
            })
            .await?;

        tracing::debug!(code, target = %link.original_url, "redirect resolved");

        Ok(link.original_url)
    }
}
