//! Shared world state for ticket lifecycle BDD scenarios.

use std::sync::Arc;

use grievance::{
    analytics::services::AnalyticsService,
    classification::adapters::KeywordRuleClassifier,
    identity::domain::Principal,
    ticket::{
        adapters::memory::InMemoryTicketRepository,
        domain::Ticket,
        services::{IntakeService, TicketLifecycleService, TicketServiceError},
    },
};
use mockable::DefaultClock;
use rstest::fixture;

/// Intake service type used by the BDD world.
pub type TestIntake = IntakeService<InMemoryTicketRepository, KeywordRuleClassifier, DefaultClock>;
/// Lifecycle service type used by the BDD world.
pub type TestLifecycle = TicketLifecycleService<InMemoryTicketRepository, DefaultClock>;

/// Scenario world for ticket lifecycle behaviour tests.
pub struct TicketWorld {
    pub intake: TestIntake,
    pub lifecycle: TestLifecycle,
    pub analytics: AnalyticsService<InMemoryTicketRepository>,
    pub admin: Principal,
    pub citizen: Option<Principal>,
    pub officer: Option<Principal>,
    pub last_ticket: Option<Ticket>,
    pub last_transition_result: Option<Result<Ticket, TicketServiceError>>,
}

impl TicketWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTicketRepository::new());
        let clock = Arc::new(DefaultClock);

        Self {
            intake: IntakeService::new(
                Arc::clone(&repository),
                Arc::new(KeywordRuleClassifier::default()),
                Arc::clone(&clock),
            ),
            lifecycle: TicketLifecycleService::new(Arc::clone(&repository), clock),
            analytics: AnalyticsService::new(repository),
            admin: Principal::administrator("Scenario Administrator"),
            citizen: None,
            officer: None,
            last_ticket: None,
            last_transition_result: None,
        }
    }

    /// Returns the scenario's citizen.
    ///
    /// # Errors
    ///
    /// Returns an error when no citizen was introduced.
    pub fn citizen(&self) -> Result<&Principal, eyre::Report> {
        self.citizen
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing citizen in scenario world"))
    }

    /// Returns the scenario's officer.
    ///
    /// # Errors
    ///
    /// Returns an error when no officer was introduced.
    pub fn officer(&self) -> Result<&Principal, eyre::Report> {
        self.officer
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing officer in scenario world"))
    }

    /// Returns the most recently filed or updated ticket.
    ///
    /// # Errors
    ///
    /// Returns an error when no ticket was filed.
    pub fn ticket(&self) -> Result<&Ticket, eyre::Report> {
        self.last_ticket
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing ticket in scenario world"))
    }
}

impl Default for TicketWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TicketWorld {
    TicketWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
