use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::domain::entities::waitlist_entry::{AuthProvider, NewWaitlistEntry, Source};

/// Deliberately loose `local@domain.tld` shape: no whitespace, exactly one `@`,
/// at least one dot after it.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Reasons a signup form is refused before anything touches the network.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailMissing,

    #[error("Name is required")]
    NameMissing,

    #[error("Please tell us where you heard about us")]
    SourceMissing,

    #[error("Please enter a valid email address")]
    EmailMalformed,

    #[error("Please select how you heard about us")]
    SourceUnknown,
}

impl ValidationError {
    /// Inline message shown under the form.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Shorter phrasing used for the toast notification.
    pub fn toast(&self) -> &'static str {
        match self {
            ValidationError::EmailMissing => "Please enter your email address",
            ValidationError::NameMissing => "Please enter your name",
            ValidationError::SourceMissing | ValidationError::SourceUnknown => {
                "Please select how you heard about us"
            }
            ValidationError::EmailMalformed => "Please enter a valid email address",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// Checks the raw form fields in order; the first failing rule wins.
///
/// Whitespace around each field is trimmed. Case is preserved, the store
/// compares emails exactly as submitted.
pub fn validate_signup(
    name: &str,
    email: &str,
    source: &str,
) -> Result<NewWaitlistEntry, ValidationError> {
    let (name, email, source) = (name.trim(), email.trim(), source.trim());

    if email.is_empty() {
        return Err(ValidationError::EmailMissing);
    }
    if name.is_empty() {
        return Err(ValidationError::NameMissing);
    }
    if source.is_empty() {
        return Err(ValidationError::SourceMissing);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailMalformed);
    }
    let source = Source::from_str(source).map_err(|_| ValidationError::SourceUnknown)?;

    Ok(NewWaitlistEntry {
        name: name.to_string(),
        email: email.to_string(),
        source,
        auth_provider: AuthProvider::Waitlist,
    })
}
