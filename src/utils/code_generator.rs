//! Short code derivation.
//!
//! Codes are derived, not random: a cryptographic hash of the original URL
//! and a timestamp, truncated to 8 hex characters. The function is pure;
//! collision handling belongs to the caller, which retries with a fresh
//! timestamp.

use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Length of a short code in hex characters.
pub const CODE_LENGTH: usize = 8;

/// Derives an 8-character hex short code from a URL and a timestamp.
///
/// SHA-256 over the URL concatenated with the RFC 3339 nanosecond timestamp,
/// truncated to the first four bytes. Identical inputs always yield the same
/// code; nanosecond timestamp granularity makes repeated collisions across
/// retries vanishingly unlikely.
///
/// # Examples
///
/// ```
/// use urlclip::utils::code_generator::generate_code;
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
/// let code = generate_code("https://example.com", ts);
/// assert_eq!(code.len(), 8);
/// assert_eq!(code, generate_code("https://example.com", ts));
/// ```
pub fn generate_code(original_url: &str, timestamp: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(original_url.as_bytes());
    hasher.update(
        timestamp
            .to_rfc3339_opts(SecondsFormat::Nanos, true)
            .as_bytes(),
    );

    hex::encode(&hasher.finalize()[..CODE_LENGTH / 2])
}
