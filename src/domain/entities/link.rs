//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use crate::error::AppError;

/// A shortened link: the mapping from a short code to an original URL plus
/// expiry, protection, and access metadata.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub password_protected: bool,
    /// Present iff `password_protected`. Stored in plaintext; authorization
    /// is an exact string compare.
    pub password: Option<String>,
    pub access_count: i64,
}

impl Link {
    /// Returns true if the link's expiry lies strictly before `now`.
    ///
    /// A link whose `expires_at` equals `now` is still servable; every later
    /// dereference is expired. Links without an expiry never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }

    /// Checks a supplied password against this link's protection settings.
    ///
    /// Unprotected links accept any input, including none. Protected links
    /// require an exact string match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::PasswordRequired`] if the link is protected and no
    /// password was supplied, [`AppError::InvalidPassword`] on a mismatch.
    pub fn authorize(&self, supplied: Option<&str>) -> Result<(), AppError> {
        if !self.password_protected {
            return Ok(());
        }

        let supplied = supplied.ok_or(AppError::PasswordRequired)?;

        match self.password.as_deref() {
            Some(expected) if expected == supplied => Ok(()),
            _ => Err(AppError::InvalidPassword),
        }
    }
}

/// Input data for persisting a new link.
///
/// `password_protected` is derived from the presence of `password`; the store
/// sets `created_at` and starts `access_count` at zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_link(expires_at: Option<DateTime<Utc>>, password: Option<&str>) -> Link {
        Link {
            id: 1,
            short_code: "ab12cd34".to_string(),
            original_url: "https://example.com".to_string(),
            created_at: Utc::now(),
            expires_at,
            password_protected: password.is_some(),
            password: password.map(str::to_string),
            access_count: 0,
        }
    }

    #[test]
    fn test_not_expired_without_expiry() {
        let link = make_link(None, None);
        assert!(!link.is_expired(Utc::now()));
    }

    #[test]
    fn test_expired_strictly_before_now() {
        let now = Utc::now();
        let link = make_link(Some(now - Duration::seconds(1)), None);
        assert!(link.is_expired(now));
    }

    #[test]
    fn test_expiry_equal_to_now_still_servable() {
        let now = Utc::now();
        let link = make_link(Some(now), None);
        assert!(!link.is_expired(now));
        assert!(link.is_expired(now + Duration::seconds(1)));
    }

    #[test]
    fn test_authorize_unprotected_ignores_password() {
        let link = make_link(None, None);
        assert!(link.authorize(None).is_ok());
        assert!(link.authorize(Some("anything")).is_ok());
    }

    #[test]
    fn test_authorize_protected_requires_password() {
        let link = make_link(None, Some("secret"));
        assert!(matches!(
            link.authorize(None),
            Err(AppError::PasswordRequired)
        ));
    }

    #[test]
    fn test_authorize_protected_rejects_mismatch() {
        let link = make_link(None, Some("secret"));
        assert!(matches!(
            link.authorize(Some("wrong")),
            Err(AppError::InvalidPassword)
        ));
    }

    #[test]
    fn test_authorize_protected_accepts_exact_match() {
        let link = make_link(None, Some("secret"));
        assert!(link.authorize(Some("secret")).is_ok());
    }
}
