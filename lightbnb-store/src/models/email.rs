//! Case-folded email addresses
//!
//! Emails are trimmed and lowercased when constructed, so the value written by
//! `add_user` and the value used for lookup always agree regardless of how the
//! caller typed them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::ValidationError;

/// Maximum length for an address (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

/// One `@`, non-empty local part and domain, no whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("invalid email regex"));

/// Validated, lowercased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Normalize and validate an email address.
    ///
    /// # Example
    /// ```
    /// use lightbnb_store::models::Email;
    ///
    /// let email = Email::new("  Tristan@Example.COM ").unwrap();
    /// assert_eq!(email.as_str(), "tristan@example.com");
    /// assert!(Email::new("no-at-sign").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let folded = Self::fold(s);

        if folded.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if folded.len() > MAX_EMAIL_LEN || !EMAIL_RE.is_match(&folded) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@domain",
            });
        }

        Ok(Self(folded))
    }

    /// Case-fold without validating, for lookups against stored addresses.
    pub fn fold(s: &str) -> String {
        s.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
