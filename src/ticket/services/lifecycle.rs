//! Ticket lookup and status lifecycle orchestration.

use super::{
    TicketServiceError, TicketServiceResult,
    events::{EventSink, publish},
};
use crate::{
    identity::domain::{Principal, Role},
    ticket::{
        domain::{StatusTransition, Ticket, TicketNumber, TicketScope, TicketStatus},
        ports::{TicketEvent, TicketEventSink, TicketRepository},
    },
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Request payload for changing a ticket's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTicketRequest {
    number: String,
    target_status: String,
    comment: Option<String>,
}

impl TransitionTicketRequest {
    /// Creates a request for the given ticket number and target status.
    #[must_use]
    pub fn new(number: impl Into<String>, target_status: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            target_status: target_status.into(),
            comment: None,
        }
    }

    /// Attaches a comment recorded in the status history.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

fn parse_known_number(raw: &str) -> TicketServiceResult<TicketNumber> {
    TicketNumber::parse(raw).map_err(|_| TicketServiceError::NotFound(raw.trim().to_owned()))
}

/// Ticket lifecycle orchestration service.
#[derive(Clone)]
pub struct TicketLifecycleService<R, C>
where
    R: TicketRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    events: EventSink,
}

impl<R, C> TicketLifecycleService<R, C>
where
    R: TicketRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            events: None,
        }
    }

    /// Publishes a [`TicketEvent::StatusChanged`] to `sink` after every
    /// committed transition.
    #[must_use]
    pub fn with_events(mut self, sink: Arc<dyn TicketEventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    async fn find_visible_or_error(
        &self,
        viewer: &Principal,
        number: &TicketNumber,
    ) -> TicketServiceResult<Ticket> {
        self.repository
            .find_by_number(number)
            .await?
            .filter(|ticket| TicketScope::for_principal(viewer).includes(ticket))
            .ok_or_else(|| TicketServiceError::NotFound(number.to_string()))
    }

    /// Returns the tickets visible to `viewer`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TicketServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, viewer: &Principal) -> TicketServiceResult<Vec<Ticket>> {
        let scope = TicketScope::for_principal(viewer);
        Ok(self.repository.list(&scope).await?)
    }

    /// Returns one ticket if it is visible to `viewer`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketServiceError::NotFound`] when the id is malformed, the
    /// ticket does not exist or it lies outside the viewer's scope.
    pub async fn find(&self, viewer: &Principal, number: &str) -> TicketServiceResult<Ticket> {
        let parsed = parse_known_number(number)?;
        self.find_visible_or_error(viewer, &parsed).await
    }

    /// Moves a ticket to a new status.
    ///
    /// Officers may change tickets in their own department and
    /// administrators any ticket; citizens may not change status.
    ///
    /// # Errors
    ///
    /// Returns [`TicketServiceError::InvalidState`] for an unknown status,
    /// [`TicketServiceError::NotFound`] for a malformed id or a missing or
    /// invisible ticket,
    /// [`TicketServiceError::AccessDenied`] for citizens and
    /// [`TicketServiceError::Domain`] when the transition is illegal.
    pub async fn transition(
        &self,
        actor: &Principal,
        request: TransitionTicketRequest,
    ) -> TicketServiceResult<Ticket> {
        let number = parse_known_number(&request.number)?;
        let target = TicketStatus::try_from(request.target_status.as_str())?;

        self.find_visible_or_error(actor, &number).await?;
        if actor.role() == Role::Citizen {
            return Err(TicketServiceError::AccessDenied {
                principal: actor.id(),
                action: "change ticket status",
            });
        }

        let mut transition = StatusTransition::new(target, actor.id(), &*self.clock);
        if let Some(comment) = request.comment {
            transition = transition.with_comment(comment);
        }

        match self.repository.transition(&number, &transition).await {
            Ok(ticket) => {
                info!(
                    ticket = %number,
                    actor = %actor.id(),
                    status = %ticket.status(),
                    "ticket status changed"
                );
                publish(self.events.as_ref(), TicketEvent::StatusChanged(&ticket)).await;
                Ok(ticket)
            }
            Err(err) => {
                warn!(
                    ticket = %number,
                    actor = %actor.id(),
                    target = %target,
                    error = %err,
                    "ticket status change rejected"
                );
                Err(err.into())
            }
        }
    }
}
