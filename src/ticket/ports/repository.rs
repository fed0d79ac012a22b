//! Repository port for ticket identity allocation, lookup and status
//! mutation.

use crate::ticket::domain::{
    NewTicket, StatusTransition, Ticket, TicketDomainError, TicketNumber, TicketScope,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for ticket repository operations.
pub type TicketRepositoryResult<T> = Result<T, TicketRepositoryError>;

/// Ticket persistence contract.
///
/// Implementations serialise number allocation globally and status
/// mutation per ticket, and never expose a partially written ticket to
/// readers.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Allocates a fresh ticket number and stores the opened ticket.
    ///
    /// # Errors
    ///
    /// Returns [`TicketRepositoryError::Rejected`] when no number can be
    /// allocated or [`TicketRepositoryError::DuplicateTicket`] when the
    /// allocated number collides with stored data.
    async fn create(&self, draft: NewTicket) -> TicketRepositoryResult<Ticket>;

    /// Finds a ticket by number.
    ///
    /// Returns `None` when the ticket does not exist.
    async fn find_by_number(&self, number: &TicketNumber) -> TicketRepositoryResult<Option<Ticket>>;

    /// Returns the tickets inside `scope`, newest submission first.
    async fn list(&self, scope: &TicketScope) -> TicketRepositoryResult<Vec<Ticket>>;

    /// Validates and commits a status transition atomically.
    ///
    /// # Errors
    ///
    /// Returns [`TicketRepositoryError::NotFound`] when the ticket does not
    /// exist or [`TicketRepositoryError::Rejected`] when the lifecycle rules
    /// refuse the move; in both cases nothing is written.
    async fn transition(
        &self,
        number: &TicketNumber,
        transition: &StatusTransition,
    ) -> TicketRepositoryResult<Ticket>;
}

/// Errors returned by ticket repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TicketRepositoryError {
    /// A ticket with the same number already exists.
    #[error("duplicate ticket number: {0}")]
    DuplicateTicket(TicketNumber),

    /// The ticket was not found.
    #[error("ticket not found: {0}")]
    NotFound(TicketNumber),

    /// The domain refused the mutation.
    #[error(transparent)]
    Rejected(#[from] TicketDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TicketRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
