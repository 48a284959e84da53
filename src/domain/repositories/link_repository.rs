//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Store interface for shortened links.
///
/// The store owns persistence: records are immutable values plus an id, and
/// `short_code` uniqueness is enforced by the store's native constraint, not
/// by application-level locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (a concurrent writer won the race), [`AppError::Storage`] on other
    /// database errors. No record remains on failure.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Increments the link's access counter by one.
    ///
    /// The increment happens in the store, so concurrent redirects never
    /// undercount.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment_access_count(&self, id: i64) -> Result<(), AppError>;
}
