//! Identifier and validated scalar types for the ticket domain.

use super::TicketDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable ticket number prefix, e.g. `SMG`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketPrefix(String);

impl TicketPrefix {
    const MAX_LEN: usize = 8;

    /// Creates a validated prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidTicketPrefix`] unless the trimmed
    /// value is 1-8 uppercase ASCII letters or digits.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let is_valid = !normalized.is_empty()
            && normalized.len() <= Self::MAX_LEN
            && normalized
                .chars()
                .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit());
        if !is_valid {
            return Err(TicketDomainError::InvalidTicketPrefix(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the prefix as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TicketPrefix {
    fn default() -> Self {
        Self("SMG".to_owned())
    }
}

impl TryFrom<String> for TicketPrefix {
    type Error = TicketDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TicketPrefix> for String {
    fn from(prefix: TicketPrefix) -> Self {
        prefix.0
    }
}

impl fmt::Display for TicketPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable ticket number in `PREFIX-YYYY-NNNN` form.
///
/// Numbers are allocated by the repository and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketNumber {
    prefix: TicketPrefix,
    year: i32,
    sequence: u64,
}

impl TicketNumber {
    /// Composes a ticket number from its parts.
    #[must_use]
    pub const fn from_parts(prefix: TicketPrefix, year: i32, sequence: u64) -> Self {
        Self {
            prefix,
            year,
            sequence,
        }
    }

    /// Parses a ticket number.
    ///
    /// Sequence components shorter than four digits are accepted and
    /// rendered zero-padded.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidTicketNumber`] when the value is
    /// not `PREFIX-YYYY-NNNN` with a positive sequence.
    pub fn parse(value: &str) -> Result<Self, TicketDomainError> {
        let invalid = || TicketDomainError::InvalidTicketNumber(value.to_owned());
        let mut parts = value.trim().split('-');
        let (Some(prefix), Some(year), Some(sequence), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let prefix = TicketPrefix::new(prefix).map_err(|_| invalid())?;
        if year.len() != 4 || !year.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }
        if sequence.is_empty() || !sequence.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let sequence = sequence.parse::<u64>().map_err(|_| invalid())?;
        if sequence == 0 {
            return Err(invalid());
        }

        Ok(Self::from_parts(prefix, year, sequence))
    }

    /// Returns the prefix component.
    #[must_use]
    pub const fn prefix(&self) -> &TicketPrefix {
        &self.prefix
    }

    /// Returns the period (calendar year) component.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the sequence component.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl TryFrom<String> for TicketNumber {
    type Error = TicketDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TicketNumber> for String {
    fn from(number: TicketNumber) -> Self {
        number.to_string()
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{:04}", self.prefix, self.year, self.sequence)
    }
}

/// Opaque reference to attachment bytes held by blob storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentRef(String);

impl AttachmentRef {
    /// Creates a validated attachment reference.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyAttachmentReference`] when the value
    /// is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TicketDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TicketDomainError::EmptyAttachmentReference);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
