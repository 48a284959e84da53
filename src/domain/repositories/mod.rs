//! Repository traits abstracting the durable store.

mod access_log_repository;
mod link_repository;

pub use access_log_repository::AccessLogRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use access_log_repository::MockAccessLogRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
