//! Outbound port for ticket lifecycle events.

use crate::ticket::domain::Ticket;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Lifecycle event raised after a ticket change has been committed.
#[derive(Debug, Clone, Copy)]
pub enum TicketEvent<'a> {
    /// A complaint was filed and routed.
    Submitted(&'a Ticket),
    /// A ticket moved to a new status.
    StatusChanged(&'a Ticket),
}

impl TicketEvent<'_> {
    /// Returns the ticket the event refers to.
    #[must_use]
    pub const fn ticket(&self) -> &Ticket {
        match self {
            Self::Submitted(ticket) | Self::StatusChanged(ticket) => ticket,
        }
    }
}

/// Receives committed ticket events.
///
/// Delivery happens after the ticket write, so a failing sink never undoes
/// the change that raised the event.
#[async_trait]
pub trait TicketEventSink: Send + Sync {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns [`TicketEventError`] when the event could not be recorded.
    async fn publish(&self, event: TicketEvent<'_>) -> Result<(), TicketEventError>;
}

/// Failure reported by a ticket event sink.
#[derive(Debug, Clone, Error)]
#[error("ticket event delivery failed: {0}")]
pub struct TicketEventError(Arc<dyn std::error::Error + Send + Sync>);

impl TicketEventError {
    /// Wraps a sink failure.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }
}
