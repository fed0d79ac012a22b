//! Service-level errors for ticket operations.

use crate::{
    identity::domain::PrincipalId,
    ticket::{
        domain::{ParseTicketStatusError, TicketDomainError},
        ports::TicketRepositoryError,
    },
};
use thiserror::Error;

/// Service-level errors for ticket intake and lifecycle operations.
#[derive(Debug, Error)]
pub enum TicketServiceError {
    /// Domain validation failed or the lifecycle rules refused a change.
    #[error(transparent)]
    Domain(#[from] TicketDomainError),
    /// The requested status string is unknown.
    #[error(transparent)]
    InvalidState(#[from] ParseTicketStatusError),
    /// No ticket with this id is visible to the caller. Ids that are not
    /// well-formed ticket numbers land here too.
    #[error("ticket {0} not found")]
    NotFound(String),
    /// The caller's role does not permit the operation.
    #[error("principal {principal} may not {action}")]
    AccessDenied {
        /// Principal that attempted the operation.
        principal: PrincipalId,
        /// Operation that was refused.
        action: &'static str,
    },
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TicketRepositoryError),
}

impl From<TicketRepositoryError> for TicketServiceError {
    fn from(err: TicketRepositoryError) -> Self {
        match err {
            TicketRepositoryError::Rejected(domain) => Self::Domain(domain),
            TicketRepositoryError::NotFound(number) => Self::NotFound(number.to_string()),
            other => Self::Repository(other),
        }
    }
}

/// Result type for ticket service operations.
pub type TicketServiceResult<T> = Result<T, TicketServiceError>;
