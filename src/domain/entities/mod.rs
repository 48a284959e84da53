//! Core business entities.

mod access_log;
mod link;

pub use access_log::{AccessLogEntry, NewAccessLogEntry};
pub use link::{Link, NewLink};
