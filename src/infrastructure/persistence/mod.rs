//! PostgreSQL-backed repository implementations.

mod pg_access_log_repository;
mod pg_link_repository;

pub use pg_access_log_repository::PgAccessLogRepository;
pub use pg_link_repository::PgLinkRepository;
