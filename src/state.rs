//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, RedirectService, ShortenService};

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
    pub analytics_service: Arc<AnalyticsService>,
    /// When true, client IPs are read from forwarding headers.
    pub behind_proxy: bool,
}
