//! The numeric identifier extracted from parametric routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An entity identifier taken from a `%d` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdField(u64);

impl IdField {
    /// Wraps a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses a form value, returning `default` if it is not a valid id.
    pub fn parse_or(s: &str, default: Self) -> Self {
        s.parse().unwrap_or(default)
    }
}

/// Error returned when a string is not a valid [`IdField`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdError {
    /// The input was empty.
    #[error("empty id")]
    Empty,
    /// The input contained something other than ASCII digits.
    #[error("invalid digit in id {0:?}")]
    InvalidDigit(String),
    /// The value does not fit in 64 bits.
    #[error("id {0:?} is out of range")]
    Overflow(String),
}

impl FromStr for IdField {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseIdError::Empty);
        }
        // u64::from_str would also accept a leading '+'.
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIdError::InvalidDigit(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ParseIdError::Overflow(s.to_string()))
    }
}

impl fmt::Display for IdField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for IdField {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<IdField> for u64 {
    fn from(id: IdField) -> Self {
        id.0
    }
}
