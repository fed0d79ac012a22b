//! In-memory notification repository.

use crate::{
    identity::domain::PrincipalId,
    notification::{
        domain::{Notification, NotificationId},
        ports::{NotificationRepository, NotificationRepositoryError, NotificationRepositoryResult},
    },
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory notification store kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl InMemoryNotificationRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> NotificationRepositoryError {
    NotificationRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn store(&self, notification: Notification) -> NotificationRepositoryResult<()> {
        let mut notifications = self.notifications.write().map_err(poisoned)?;
        if notifications
            .iter()
            .any(|stored| stored.id() == notification.id())
        {
            return Err(NotificationRepositoryError::DuplicateNotification(
                notification.id(),
            ));
        }
        notifications.push(notification);
        Ok(())
    }

    async fn list_for(
        &self,
        recipient: PrincipalId,
        limit: usize,
    ) -> NotificationRepositoryResult<Vec<Notification>> {
        let notifications = self.notifications.read().map_err(poisoned)?;
        let mut inbox: Vec<Notification> = notifications
            .iter()
            .rev()
            .filter(|stored| stored.recipient() == recipient)
            .cloned()
            .collect();
        drop(notifications);

        inbox.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        inbox.truncate(limit);
        Ok(inbox)
    }

    async fn mark_read(
        &self,
        id: NotificationId,
        recipient: PrincipalId,
    ) -> NotificationRepositoryResult<Notification> {
        let mut notifications = self.notifications.write().map_err(poisoned)?;
        let stored = notifications
            .iter_mut()
            .find(|stored| stored.id() == id && stored.recipient() == recipient)
            .ok_or(NotificationRepositoryError::NotFound(id))?;
        stored.mark_read();
        Ok(stored.clone())
    }
}
