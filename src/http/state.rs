//! Shared handler state.

use crate::{
    analytics::services::AnalyticsService,
    classification::adapters::KeywordRuleClassifier,
    identity::ports::PrincipalDirectory,
    notification::{ports::NotificationRepository, services::NotificationService},
    ticket::{
        ports::{TicketEventSink, TicketRepository},
        services::{IntakeService, TicketLifecycleService},
    },
};
use mockable::Clock;
use std::sync::Arc;

/// Services and collaborators reachable from every handler.
pub struct AppState<R, N, C, D>
where
    R: TicketRepository,
    N: NotificationRepository,
    C: Clock + Send + Sync,
    D: PrincipalDirectory,
{
    pub(super) intake: IntakeService<R, KeywordRuleClassifier, C>,
    pub(super) lifecycle: TicketLifecycleService<R, C>,
    pub(super) notifications: NotificationService<N, C>,
    pub(super) analytics: AnalyticsService<R>,
    pub(super) directory: Arc<D>,
}

impl<R, N, C, D> AppState<R, N, C, D>
where
    R: TicketRepository,
    N: NotificationRepository + 'static,
    C: Clock + Send + Sync + 'static,
    D: PrincipalDirectory,
{
    /// Wires the services over one ticket store, notification store, clock
    /// and directory, using the canonical keyword classifier.
    #[must_use]
    pub fn new(
        repository: Arc<R>,
        notifications: Arc<N>,
        clock: Arc<C>,
        directory: Arc<D>,
    ) -> Self {
        Self::with_classifier(
            repository,
            notifications,
            clock,
            directory,
            KeywordRuleClassifier::default(),
        )
    }

    /// Wires the services with an explicit classifier rule table.
    #[must_use]
    pub fn with_classifier(
        repository: Arc<R>,
        notifications: Arc<N>,
        clock: Arc<C>,
        directory: Arc<D>,
        classifier: KeywordRuleClassifier,
    ) -> Self {
        let inbox = NotificationService::new(notifications, Arc::clone(&clock));
        let events: Arc<dyn TicketEventSink> = Arc::new(inbox.clone());
        Self {
            intake: IntakeService::new(
                Arc::clone(&repository),
                Arc::new(classifier),
                Arc::clone(&clock),
            )
            .with_events(Arc::clone(&events)),
            lifecycle: TicketLifecycleService::new(Arc::clone(&repository), clock)
                .with_events(events),
            notifications: inbox,
            analytics: AnalyticsService::new(repository),
            directory,
        }
    }
}
