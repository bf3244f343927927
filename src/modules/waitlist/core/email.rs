// Email address accepted by the waitlist.
//
// Rules
// - Non-empty, no whitespace, exactly one '@'.
// - Non-empty local part.
// - Domain made of non-empty dot separated labels, with at least one dot (local@domain.tld).
// - Case is preserved; uniqueness is case-sensitive and enforced by the store, not here.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("email is missing")]
    Empty,

    #[error("email must not contain whitespace")]
    ContainsWhitespace,

    #[error("email must contain exactly one '@'")]
    AtSign,

    #[error("email local part is empty")]
    EmptyLocalPart,

    #[error("email domain must look like domain.tld")]
    InvalidDomain,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: impl Into<String>) -> Result<Self, EmailError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(EmailError::ContainsWhitespace);
        }
        let Some((local, domain)) = raw.split_once('@') else {
            return Err(EmailError::AtSign);
        };
        if domain.contains('@') {
            return Err(EmailError::AtSign);
        }
        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(EmailError::InvalidDomain);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
