//! Inbox orchestration and ticket event handling.

use crate::{
    identity::domain::Principal,
    notification::{
        domain::{Notification, NotificationId},
        ports::{NotificationRepository, NotificationRepositoryError},
    },
    ticket::ports::{TicketEvent, TicketEventError, TicketEventSink},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Maximum number of notifications returned by one inbox listing.
pub const INBOX_LIMIT: usize = 50;

/// Service-level errors for inbox operations.
#[derive(Debug, Error)]
pub enum NotificationServiceError {
    /// No notification with this id is addressed to the caller. Ids that are
    /// not UUIDs land here too.
    #[error("notification {0} not found")]
    NotFound(String),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(NotificationRepositoryError),
}

impl From<NotificationRepositoryError> for NotificationServiceError {
    fn from(err: NotificationRepositoryError) -> Self {
        match err {
            NotificationRepositoryError::NotFound(id) => Self::NotFound(id.to_string()),
            other => Self::Repository(other),
        }
    }
}

/// Result type for notification service operations.
pub type NotificationServiceResult<T> = Result<T, NotificationServiceError>;

/// Writes notifications for ticket events and serves recipients' inboxes.
pub struct NotificationService<N, C>
where
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<N>,
    clock: Arc<C>,
}

impl<N, C> Clone for NotificationService<N, C>
where
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<N, C> NotificationService<N, C>
where
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new notification service.
    #[must_use]
    pub const fn new(repository: Arc<N>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the newest notifications addressed to `viewer`.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, viewer: &Principal) -> NotificationServiceResult<Vec<Notification>> {
        Ok(self.repository.list_for(viewer.id(), INBOX_LIMIT).await?)
    }

    /// Marks one of `viewer`'s notifications read.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationServiceError::NotFound`] when the id is not a
    /// UUID or names no notification addressed to `viewer`.
    pub async fn mark_read(
        &self,
        viewer: &Principal,
        id: &str,
    ) -> NotificationServiceResult<Notification> {
        let parsed = NotificationId::parse(id)
            .ok_or_else(|| NotificationServiceError::NotFound(id.trim().to_owned()))?;
        let notification = self.repository.mark_read(parsed, viewer.id()).await?;
        debug!(notification = %parsed, recipient = %viewer.id(), "notification read");
        Ok(notification)
    }
}

#[async_trait]
impl<N, C> TicketEventSink for NotificationService<N, C>
where
    N: NotificationRepository,
    C: Clock + Send + Sync,
{
    async fn publish(&self, event: TicketEvent<'_>) -> Result<(), TicketEventError> {
        let notification = match event {
            TicketEvent::Submitted(ticket) => {
                Notification::complaint_submitted(ticket, &*self.clock)
            }
            TicketEvent::StatusChanged(ticket) => {
                Notification::status_updated(ticket, &*self.clock)
            }
        };
        let id = notification.id();
        let recipient = notification.recipient();
        self.repository
            .store(notification)
            .await
            .map_err(TicketEventError::new)?;
        info!(
            notification = %id,
            %recipient,
            ticket = %event.ticket().number(),
            "notification written"
        );
        Ok(())
    }
}
