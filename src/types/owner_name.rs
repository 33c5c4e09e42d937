// ABOUTME: Validated GitHub account name that owns a container package.
// ABOUTME: Rejects empty names and characters GitHub never allows in logins.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OwnerNameError {
    #[error("owner name cannot be empty")]
    Empty,

    #[error("invalid character in owner name: '{0}'")]
    InvalidChar(char),
}

/// An account login: a user or an organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerName(String);

impl OwnerName {
    pub fn new(value: &str) -> Result<Self, OwnerNameError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(OwnerNameError::Empty);
        }

        // GitHub logins are alphanumeric with single hyphens; underscores show up
        // on enterprise servers.
        for c in trimmed.chars() {
            if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                return Err(OwnerNameError::InvalidChar(c));
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
