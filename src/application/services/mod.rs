//! Business logic services orchestrating the repositories.

mod analytics_service;
mod redirect_service;
mod shorten_service;

pub use analytics_service::{AnalyticsService, LinkAnalytics};
pub use redirect_service::RedirectService;
pub use shorten_service::{ShortenOutcome, ShortenService};

/// Builds the public short URL for a code: `<base>/<code>/`.
///
/// The trailing slash is part of the canonical form handed out to callers;
/// the router accepts both variants.
pub(crate) fn build_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}/", base_url.trim_end_matches('/'), code)
}
