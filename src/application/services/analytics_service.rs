//! Analytics: aggregate access count plus per-event log data for a link.

use std::sync::Arc;

use crate::application::services::build_short_url;
use crate::domain::entities::AccessLogEntry;
use crate::domain::repositories::{AccessLogRepository, LinkRepository};
use crate::error::AppError;

/// Analytics for one link: the counter plus every recorded access.
#[derive(Debug, Clone)]
pub struct LinkAnalytics {
    pub short_url: String,
    pub access_count: i64,
    pub entries: Vec<AccessLogEntry>,
}

/// Service reading access analytics for a link.
///
/// Applies the same lookup and password gate as redirect resolution, but no
/// expiry check: analytics stay readable after a link expires.
pub struct AnalyticsService {
    links: Arc<dyn LinkRepository>,
    access_logs: Arc<dyn AccessLogRepository>,
    base_url: String,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        access_logs: Arc<dyn AccessLogRepository>,
        base_url: String,
    ) -> Self {
        Self {
            links,
            access_logs,
            base_url,
        }
    }

    /// Returns the access count and all log entries for a short code.
    ///
    /// Entries come back in insertion order. This is a pure read: repeated
    /// calls without intervening redirects return identical data.
    ///
    /// # Errors
    ///
    /// [`AppError::MissingField`] for an empty code, [`AppError::NotFound`]
    /// for an unknown one, [`AppError::PasswordRequired`] /
    /// [`AppError::InvalidPassword`] on gate failures, [`AppError::Storage`]
    /// on database errors.
    pub async fn stats(
        &self,
        code: &str,
        password: Option<&str>,
    ) -> Result<LinkAnalytics, AppError> {
        if code.is_empty() {
            return Err(AppError::MissingField);
        }

        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        link.authorize(password)?;

        let entries = self.access_logs.list_for_link(link.id).await?;

        Ok(LinkAnalytics {
            short_url: build_short_url(&self.base_url, &link.short_code),
            access_count: link.access_count,
            entries,
        })
    }
}
