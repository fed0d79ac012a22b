//! Integration tests for status changes and their audit trail.

use super::helpers::{Harness, harness};
use grievance::ticket::{
    domain::{TicketDomainError, TicketStatus},
    services::{TicketServiceError, TransitionTicketRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn officer_resolves_and_administrator_closes(harness: Harness) -> Result<(), eyre::Report> {
    let ticket = harness
        .submit(&harness.cast.citizen, "No water since morning")
        .await?;

    let resolved = harness
        .walk(
            &harness.cast.water_officer,
            &ticket,
            &["ASSIGNED", "IN_PROGRESS", "RESOLVED"],
        )
        .await?;
    let closed = harness
        .move_to(&harness.cast.admin, &resolved, "CLOSED")
        .await?;

    eyre::ensure!(closed.status() == TicketStatus::Closed, "ticket should be closed");
    eyre::ensure!(
        closed.resolved_at() == resolved.resolved_at() && resolved.resolved_at().is_some(),
        "closing keeps the resolution time"
    );
    let visited: Vec<TicketStatus> = closed.history().iter().map(|change| change.to).collect();
    eyre::ensure!(
        visited
            == [
                TicketStatus::Submitted,
                TicketStatus::Assigned,
                TicketStatus::InProgress,
                TicketStatus::Resolved,
                TicketStatus::Closed,
            ],
        "history should list every status in order, got {visited:?}"
    );
    eyre::ensure!(
        closed
            .history()
            .windows(2)
            .all(|pair| matches!(pair, [earlier, later] if earlier.changed_at < later.changed_at)),
        "history timestamps should increase"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resolved_ticket_can_be_reopened(harness: Harness) -> Result<(), eyre::Report> {
    let ticket = harness.submit(&harness.cast.citizen, "Leaking pipe").await?;
    let resolved = harness
        .walk(
            &harness.cast.water_officer,
            &ticket,
            &["ASSIGNED", "IN_PROGRESS", "RESOLVED"],
        )
        .await?;

    let reopened = harness
        .move_to(&harness.cast.water_officer, &resolved, "In Progress")
        .await?;

    eyre::ensure!(
        reopened.status() == TicketStatus::InProgress,
        "reopened ticket is in progress"
    );
    eyre::ensure!(
        reopened.submitted_at() == ticket.submitted_at(),
        "submission time is write-once"
    );
    eyre::ensure!(reopened.number() == ticket.number(), "number is write-once");
    Ok(())
}

#[rstest]
#[case(&[], "CLOSED")]
#[case(&["ASSIGNED"], "RESOLVED")]
#[case(&["REJECTED"], "ASSIGNED")]
#[case(&["ASSIGNED", "IN_PROGRESS", "RESOLVED", "CLOSED"], "IN_PROGRESS")]
#[tokio::test(flavor = "multi_thread")]
async fn illegal_moves_leave_ticket_unchanged(
    harness: Harness,
    #[case] setup: &[&str],
    #[case] target: &str,
) -> Result<(), eyre::Report> {
    let ticket = harness.submit(&harness.cast.citizen, "Pipe leak").await?;
    let before = harness.walk(&harness.cast.admin, &ticket, setup).await?;

    let result = harness.move_to(&harness.cast.admin, &before, target).await;

    eyre::ensure!(
        matches!(
            result,
            Err(TicketServiceError::Domain(
                TicketDomainError::InvalidStateTransition { .. }
            ))
        ),
        "expected InvalidStateTransition, got {result:?}"
    );
    let after = harness
        .lifecycle
        .find(&harness.cast.admin, &ticket.number().to_string())
        .await?;
    eyre::ensure!(after == before, "rejected move must not change the ticket");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_comment_is_recorded(harness: Harness) -> Result<(), eyre::Report> {
    let ticket = harness.submit(&harness.cast.citizen, "Water leak").await?;

    let rejected = harness
        .lifecycle
        .transition(
            &harness.cast.water_officer,
            TransitionTicketRequest::new(ticket.number().to_string(), "REJECTED")
                .with_comment("Duplicate of SMG-2026-0001"),
        )
        .await?;

    let last = rejected
        .history()
        .last()
        .ok_or_else(|| eyre::eyre!("history should not be empty"))?;
    eyre::ensure!(last.from == Some(TicketStatus::Submitted), "from mismatch");
    eyre::ensure!(last.to == TicketStatus::Rejected, "to mismatch");
    eyre::ensure!(
        last.comment.as_deref() == Some("Duplicate of SMG-2026-0001"),
        "comment mismatch"
    );
    eyre::ensure!(
        last.actor == harness.cast.water_officer.id(),
        "actor mismatch"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn citizens_and_foreign_officers_cannot_change_status(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let ticket = harness.submit(&harness.cast.citizen, "Water leak").await?;

    let by_owner = harness
        .move_to(&harness.cast.citizen, &ticket, "ASSIGNED")
        .await;
    let by_foreign_officer = harness
        .move_to(&harness.cast.power_officer, &ticket, "ASSIGNED")
        .await;

    eyre::ensure!(
        matches!(by_owner, Err(TicketServiceError::AccessDenied { .. })),
        "expected AccessDenied, got {by_owner:?}"
    );
    eyre::ensure!(
        matches!(by_foreign_officer, Err(TicketServiceError::NotFound(_))),
        "expected NotFound, got {by_foreign_officer:?}"
    );
    let unchanged = harness
        .lifecycle
        .find(&harness.cast.admin, &ticket.number().to_string())
        .await?;
    eyre::ensure!(unchanged == ticket, "ticket must be unchanged");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_ticket_is_not_found(harness: Harness) -> Result<(), eyre::Report> {
    let result = harness
        .lifecycle
        .transition(
            &harness.cast.admin,
            TransitionTicketRequest::new("SMG-2026-0404", "ASSIGNED"),
        )
        .await;

    eyre::ensure!(
        matches!(result, Err(TicketServiceError::NotFound(_))),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}
