//! Repository port for notification inboxes.

use crate::{
    identity::domain::PrincipalId,
    notification::domain::{Notification, NotificationId},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification repository operations.
pub type NotificationRepositoryResult<T> = Result<T, NotificationRepositoryError>;

/// Notification persistence contract.
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Stores a new notification.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationRepositoryError::DuplicateNotification`] when the
    /// identifier is already stored.
    async fn store(&self, notification: Notification) -> NotificationRepositoryResult<()>;

    /// Returns at most `limit` notifications addressed to `recipient`,
    /// newest first.
    async fn list_for(
        &self,
        recipient: PrincipalId,
        limit: usize,
    ) -> NotificationRepositoryResult<Vec<Notification>>;

    /// Marks one of `recipient`'s notifications read and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationRepositoryError::NotFound`] when no such
    /// notification is addressed to `recipient`.
    async fn mark_read(
        &self,
        id: NotificationId,
        recipient: PrincipalId,
    ) -> NotificationRepositoryResult<Notification>;
}

/// Errors returned by notification repository implementations.
#[derive(Debug, Clone, Error)]
pub enum NotificationRepositoryError {
    /// A notification with the same identifier already exists.
    #[error("duplicate notification: {0}")]
    DuplicateNotification(NotificationId),

    /// The notification does not exist for this recipient.
    #[error("notification not found: {0}")]
    NotFound(NotificationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
