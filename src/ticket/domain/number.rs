//! Collision-free ticket number allocation.

use super::{TicketDomainError, TicketNumber, TicketPrefix};
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;

/// Monotonic per-year counter behind ticket numbers.
///
/// The sequence is not thread-safe on its own; repositories hold it under
/// the same lock that serialises ticket creation.
#[derive(Debug, Clone, Default)]
pub struct TicketNumberSequence {
    prefix: TicketPrefix,
    last_issued: HashMap<i32, u64>,
}

impl TicketNumberSequence {
    /// Creates an empty sequence for the given prefix.
    #[must_use]
    pub fn new(prefix: TicketPrefix) -> Self {
        Self {
            prefix,
            last_issued: HashMap::new(),
        }
    }

    /// Returns the prefix stamped on allocated numbers.
    #[must_use]
    pub const fn prefix(&self) -> &TicketPrefix {
        &self.prefix
    }

    /// Allocates the next number in the period containing `at`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::SequenceExhausted`] when the period's
    /// counter cannot advance.
    pub fn next(&mut self, at: DateTime<Utc>) -> Result<TicketNumber, TicketDomainError> {
        let year = at.year();
        let last = self.last_issued.entry(year).or_insert(0);
        let sequence = last
            .checked_add(1)
            .ok_or_else(|| TicketDomainError::SequenceExhausted {
                prefix: self.prefix.to_string(),
                year,
            })?;
        *last = sequence;
        Ok(TicketNumber::from_parts(self.prefix.clone(), year, sequence))
    }

    /// Advances the counter past an already-issued number.
    ///
    /// Numbers with a different prefix are ignored.
    pub fn observe(&mut self, number: &TicketNumber) {
        if number.prefix() != &self.prefix {
            return;
        }
        let last = self.last_issued.entry(number.year()).or_insert(0);
        if number.sequence() > *last {
            *last = number.sequence();
        }
    }
}
