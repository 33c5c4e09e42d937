// ABOUTME: Secret API token that never prints its value.
// ABOUTME: Debug and Display are redacted so settings can be logged safely.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token cannot be empty")]
    Empty,

    #[error("token contains characters that are not allowed in an HTTP header")]
    NotHeaderSafe,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: &str) -> Result<Self, TokenError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TokenError::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_graphic()) {
            return Err(TokenError::NotHeaderSafe);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The raw secret. Only the HTTP client should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
