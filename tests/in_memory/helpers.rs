//! Shared harness for in-memory integration tests.

use crate::test_helpers::{Cast, StepClock};
use grievance::{
    analytics::services::AnalyticsService,
    classification::adapters::KeywordRuleClassifier,
    identity::domain::Principal,
    notification::{
        adapters::memory::InMemoryNotificationRepository, services::NotificationService,
    },
    ticket::{
        adapters::memory::InMemoryTicketRepository,
        domain::Ticket,
        ports::TicketEventSink,
        services::{
            IntakeService, SubmitComplaintRequest, TicketLifecycleService, TicketServiceResult,
            TransitionTicketRequest,
        },
    },
};
use rstest::fixture;
use std::sync::Arc;

/// Intake service under test.
pub type TestIntake = IntakeService<InMemoryTicketRepository, KeywordRuleClassifier, StepClock>;
/// Lifecycle service under test.
pub type TestLifecycle = TicketLifecycleService<InMemoryTicketRepository, StepClock>;
/// Notification inbox under test.
pub type TestInbox = NotificationService<InMemoryNotificationRepository, StepClock>;

/// Services wired over one in-memory repository.
pub struct Harness {
    /// Shared repository.
    pub repository: Arc<InMemoryTicketRepository>,
    /// Complaint intake.
    pub intake: TestIntake,
    /// Lookup and status changes.
    pub lifecycle: TestLifecycle,
    /// Submitter notifications fed by intake and lifecycle events.
    pub notifications: TestInbox,
    /// Dashboard statistics.
    pub analytics: AnalyticsService<InMemoryTicketRepository>,
    /// Principals acting in the tests.
    pub cast: Cast,
}

impl Harness {
    /// Files a complaint whose description is `description`.
    pub async fn submit(
        &self,
        submitter: &Principal,
        description: &str,
    ) -> TicketServiceResult<Ticket> {
        let request = SubmitComplaintRequest::new("Complaint", description, "Ward 7");
        self.intake.submit(submitter, request).await
    }

    /// Moves `ticket` to `status` on behalf of `actor`.
    pub async fn move_to(
        &self,
        actor: &Principal,
        ticket: &Ticket,
        status: &str,
    ) -> TicketServiceResult<Ticket> {
        let request = TransitionTicketRequest::new(ticket.number().to_string(), status);
        self.lifecycle.transition(actor, request).await
    }

    /// Walks `ticket` through `statuses` in order, returning the last state.
    pub async fn walk(
        &self,
        actor: &Principal,
        ticket: &Ticket,
        statuses: &[&str],
    ) -> TicketServiceResult<Ticket> {
        let mut current = ticket.clone();
        for status in statuses {
            current = self.move_to(actor, &current, status).await?;
        }
        Ok(current)
    }
}

/// Provides a fresh harness for each test.
#[fixture]
pub fn harness() -> Harness {
    let repository = Arc::new(InMemoryTicketRepository::new());
    let clock = Arc::new(StepClock::default());
    let notifications = NotificationService::new(
        Arc::new(InMemoryNotificationRepository::new()),
        Arc::clone(&clock),
    );
    let events: Arc<dyn TicketEventSink> = Arc::new(notifications.clone());
    Harness {
        intake: IntakeService::new(
            Arc::clone(&repository),
            Arc::new(KeywordRuleClassifier::default()),
            Arc::clone(&clock),
        )
        .with_events(Arc::clone(&events)),
        lifecycle: TicketLifecycleService::new(Arc::clone(&repository), clock).with_events(events),
        notifications,
        analytics: AnalyticsService::new(Arc::clone(&repository)),
        repository,
        cast: Cast::new(),
    }
}
