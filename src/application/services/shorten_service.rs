//! Link creation service: validation, expiry resolution, code generation.

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use url::Url;

use crate::application::services::build_short_url;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum length of an original URL, in characters.
const MAX_URL_LENGTH: usize = 2048;

/// Expiry applied when the caller supplies none.
const DEFAULT_TTL_HOURS: i64 = 24;

/// Attempts at deriving a collision-free code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Format accepted for caller-supplied expiration timestamps.
const EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Result of a successful shorten operation.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub short_code: String,
    pub short_url: String,
    pub expires_at: DateTime<Utc>,
}

/// Service for creating shortened links.
///
/// Validates input in a fixed order, resolves the expiration instant in the
/// configured timezone offset, and derives a unique short code with bounded
/// collision retries.
pub struct ShortenService {
    links: Arc<dyn LinkRepository>,
    base_url: String,
    expiry_offset: FixedOffset,
}

impl ShortenService {
    /// Creates a new shorten service.
    ///
    /// `base_url` is the public address short URLs are built from;
    /// `expiry_offset` is the fixed UTC offset caller-supplied expiration
    /// timestamps are interpreted in.
    pub fn new(links: Arc<dyn LinkRepository>, base_url: String, expiry_offset: FixedOffset) -> Self {
        Self {
            links,
            base_url,
            expiry_offset,
        }
    }

    /// Shortens a URL.
    ///
    /// # Validation order
    ///
    /// 1. `url` absent → [`AppError::MissingField`]
    /// 2. blank after trim → [`AppError::EmptyUrl`]
    /// 3. longer than 2048 characters → [`AppError::TooLong`]
    /// 4. not an absolute URL with a host → [`AppError::InvalidUrl`]
    /// 5. malformed `expiration_timestamp` → [`AppError::InvalidDateFormat`]
    /// 6. expiration not strictly in the future → [`AppError::ExpirationInPast`]
    ///
    /// Without an expiration the link lives for 24 hours. A non-empty
    /// `password` marks the link password-protected.
    ///
    /// # Errors
    ///
    /// Besides the validation errors above: [`AppError::GenerationExhausted`]
    /// when the bounded collision retry runs out, [`AppError::Storage`] when
    /// persistence fails (no link record remains in that case).
    pub async fn shorten(
        &self,
        url: Option<String>,
        expiration_timestamp: Option<String>,
        password: Option<String>,
    ) -> Result<ShortenOutcome, AppError> {
        let url = url.ok_or(AppError::MissingField)?;

        if url.trim().is_empty() {
            return Err(AppError::EmptyUrl);
        }

        if url.chars().count() > MAX_URL_LENGTH {
            return Err(AppError::TooLong);
        }

        let parsed = Url::parse(&url).map_err(|_| AppError::InvalidUrl)?;
        if !parsed.has_host() {
            return Err(AppError::InvalidUrl);
        }

        let now = Utc::now();
        let expires_at = match expiration_timestamp {
            Some(raw) => {
                let resolved = self.resolve_expiry(&raw)?;
                if resolved <= now {
                    return Err(AppError::ExpirationInPast);
                }
                resolved
            }
            None => now + Duration::hours(DEFAULT_TTL_HOURS),
        };

        let password = password.filter(|p| !p.is_empty());

        let link = self.create_with_unique_code(url, expires_at, password).await?;

        tracing::debug!(code = %link.short_code, "link created");

        Ok(ShortenOutcome {
            short_url: build_short_url(&self.base_url, &link.short_code),
            short_code: link.short_code,
            expires_at,
        })
    }

    /// Parses a `YYYY-MM-DD HH:MM:SS` timestamp in the configured offset and
    /// converts it to an absolute instant.
    fn resolve_expiry(&self, raw: &str) -> Result<DateTime<Utc>, AppError> {
        let naive = NaiveDateTime::parse_from_str(raw, EXPIRY_FORMAT)
            .map_err(|_| AppError::InvalidDateFormat)?;

        let local = naive
            .and_local_timezone(self.expiry_offset)
            .single()
            .ok_or(AppError::InvalidDateFormat)?;

        Ok(local.with_timezone(&Utc))
    }

    /// Derives a code from the URL and a fresh timestamp, retrying a bounded
    /// number of times on collision before persisting.
    ///
    /// A unique-constraint conflict from the store counts as a collision too:
    /// a concurrent writer may insert the same code between the lookup and
    /// the insert.
    async fn create_with_unique_code(
        &self,
        original_url: String,
        expires_at: DateTime<Utc>,
        password: Option<String>,
    ) -> Result<Link, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(&original_url, Utc::now());

            if self.links.find_by_code(&code).await?.is_some() {
                continue;
            }

            match self
                .links
                .create(NewLink {
                    short_code: code,
                    original_url: original_url.clone(),
                    expires_at,
                    password: password.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::GenerationExhausted)
    }
}
