//! Error types for ticket domain validation and parsing.

use super::{TicketNumber, TicketStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating ticket domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketDomainError {
    /// The submission title is empty after trimming.
    #[error("complaint title must not be empty")]
    EmptyTitle,

    /// The submission description is empty after trimming.
    #[error("complaint description must not be empty")]
    EmptyDescription,

    /// The submission location is empty after trimming.
    #[error("complaint location must not be empty")]
    EmptyLocation,

    /// An attachment reference is empty after trimming.
    #[error("attachment reference must not be empty")]
    EmptyAttachmentReference,

    /// Text submitted for classification is empty after trimming.
    #[error("text to classify must not be empty")]
    EmptyClassificationText,

    /// The ticket number prefix is not 1-8 uppercase ASCII alphanumerics.
    #[error("invalid ticket prefix '{0}', expected 1-8 uppercase letters or digits")]
    InvalidTicketPrefix(String),

    /// The ticket number does not follow `PREFIX-YYYY-NNNN`.
    #[error("invalid ticket number '{0}', expected PREFIX-YYYY-NNNN")]
    InvalidTicketNumber(String),

    /// The per-year sequence has no numbers left.
    #[error("ticket sequence exhausted for {prefix} in {year}")]
    SequenceExhausted {
        /// Ticket number prefix.
        prefix: String,
        /// Calendar year of the exhausted period.
        year: i32,
    },

    /// The requested status change is not in the legal transition table.
    #[error("invalid status transition for ticket {ticket}: {from} -> {to}")]
    InvalidStateTransition {
        /// Ticket whose transition was rejected.
        ticket: TicketNumber,
        /// Current status.
        from: TicketStatus,
        /// Requested target status.
        to: TicketStatus,
    },
}

impl TicketDomainError {
    /// Returns whether the error reports malformed caller input rather than
    /// a rejected state change.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(
            self,
            Self::InvalidStateTransition { .. } | Self::SequenceExhausted { .. }
        )
    }
}

/// Error returned while parsing ticket statuses from requests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown ticket status: {0}")]
pub struct ParseTicketStatusError(pub String);

/// Error returned while parsing priority labels such as `High`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown ticket priority: {0}")]
pub struct ParsePriorityError(pub String);
