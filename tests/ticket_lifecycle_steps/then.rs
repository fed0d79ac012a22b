//! Then steps for ticket lifecycle BDD scenarios.

use super::world::{TicketWorld, run_async};
use grievance::{
    classification::domain::Department,
    ticket::{
        domain::{Priority, TicketDomainError, TicketStatus},
        services::TicketServiceError,
    },
};
use rstest_bdd_macros::then;

#[then(r#"the ticket status is "{status}""#)]
fn ticket_status_is(world: &TicketWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TicketStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let number = world.ticket()?.number().to_string();
    let stored = run_async(world.lifecycle.find(&world.admin, &number))?;

    eyre::ensure!(
        stored.status() == expected,
        "expected status {}, found {}",
        expected.as_str(),
        stored.status().as_str()
    );
    Ok(())
}

#[then(r#"the ticket is routed to "{department}" with priority "{priority}""#)]
fn ticket_is_routed(
    world: &TicketWorld,
    department: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let expected_department = Department::try_from(department.as_str())
        .map_err(|err| eyre::eyre!("invalid department in scenario: {err}"))?;
    let expected_priority = Priority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let ticket = world.ticket()?;

    eyre::ensure!(
        ticket.department() == expected_department,
        "expected department {expected_department}, found {}",
        ticket.department()
    );
    eyre::ensure!(
        ticket.priority() == expected_priority,
        "expected priority {expected_priority}, found {}",
        ticket.priority()
    );
    Ok(())
}

#[then("the status change fails with an invalid state transition error")]
fn status_change_fails_with_invalid_transition(world: &TicketWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    eyre::ensure!(
        matches!(
            result,
            Err(TicketServiceError::Domain(
                TicketDomainError::InvalidStateTransition { .. }
            ))
        ),
        "expected InvalidStateTransition error, got {result:?}"
    );
    Ok(())
}

#[then("the status change fails with an access denied error")]
fn status_change_fails_with_access_denied(world: &TicketWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    eyre::ensure!(
        matches!(result, Err(TicketServiceError::AccessDenied { .. })),
        "expected AccessDenied error, got {result:?}"
    );
    Ok(())
}

#[then("the dashboard reports {resolved:u64} resolved of {total:u64} total")]
fn dashboard_reports(world: &TicketWorld, resolved: u64, total: u64) -> Result<(), eyre::Report> {
    let stats = run_async(world.analytics.dashboard(&world.admin))?;

    eyre::ensure!(
        u64::try_from(stats.resolved())? == resolved,
        "expected {resolved} resolved, found {}",
        stats.resolved()
    );
    eyre::ensure!(
        u64::try_from(stats.total())? == total,
        "expected {total} total, found {}",
        stats.total()
    );
    Ok(())
}
