//! API layer: DTOs and handlers.

pub mod dto;
pub mod handlers;
