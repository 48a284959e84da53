//! Request/response data transfer objects.

pub mod analytics;
pub mod health;
pub mod shorten;
