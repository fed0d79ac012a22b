//! Integration tests for parallel creation and mutation.

use super::helpers::{Harness, harness};
use grievance::ticket::{
    domain::{TicketDomainError, TicketStatus},
    services::TicketServiceError,
};
use rstest::rstest;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::task::JoinSet;

const PARALLEL_SUBMISSIONS: u64 = 64;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_submissions_get_distinct_numbers(harness: Harness) -> Result<(), eyre::Report> {
    let shared = Arc::new(harness);
    let mut tasks = JoinSet::new();
    for index in 0..PARALLEL_SUBMISSIONS {
        let worker = Arc::clone(&shared);
        tasks.spawn(async move {
            let description = format!("Water leak report {index}");
            worker.submit(&worker.cast.citizen, &description).await
        });
    }

    let mut sequences = BTreeSet::new();
    while let Some(joined) = tasks.join_next().await {
        let ticket = joined??;
        sequences.insert(ticket.number().sequence());
    }

    let expected: BTreeSet<u64> = (1..=PARALLEL_SUBMISSIONS).collect();
    eyre::ensure!(sequences == expected, "numbers must be 1..=64 without gaps or repeats");
    let listed = shared.lifecycle.list(&shared.cast.admin).await?;
    eyre::ensure!(
        listed.len() == expected.len(),
        "every submission is stored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_moves_on_one_ticket_apply_once(harness: Harness) -> Result<(), eyre::Report> {
    let shared = Arc::new(harness);
    let ticket = shared.submit(&shared.cast.citizen, "Water leak").await?;

    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let worker = Arc::clone(&shared);
        let target = ticket.clone();
        tasks.spawn(async move {
            worker
                .move_to(&worker.cast.water_officer, &target, "ASSIGNED")
                .await
        });
    }

    let mut accepted = 0_usize;
    while let Some(joined) = tasks.join_next().await {
        match joined? {
            Ok(_) => accepted += 1,
            Err(TicketServiceError::Domain(TicketDomainError::InvalidStateTransition {
                from: TicketStatus::Assigned,
                ..
            })) => {}
            Err(other) => return Err(eyre::eyre!("unexpected failure: {other}")),
        }
    }

    eyre::ensure!(accepted == 1, "exactly one move should win, got {accepted}");
    let stored = shared
        .lifecycle
        .find(&shared.cast.admin, &ticket.number().to_string())
        .await?;
    eyre::ensure!(stored.history().len() == 2, "one history entry per accepted move");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn moves_on_different_tickets_all_apply(harness: Harness) -> Result<(), eyre::Report> {
    let shared = Arc::new(harness);
    let mut tickets = Vec::new();
    for index in 0..16 {
        tickets.push(
            shared
                .submit(&shared.cast.citizen, &format!("Pipe {index} leaking"))
                .await?,
        );
    }

    let mut tasks = JoinSet::new();
    for ticket in tickets {
        let worker = Arc::clone(&shared);
        tasks.spawn(async move {
            worker
                .walk(
                    &worker.cast.water_officer,
                    &ticket,
                    &["ASSIGNED", "IN_PROGRESS", "RESOLVED"],
                )
                .await
        });
    }
    while let Some(joined) = tasks.join_next().await {
        let resolved = joined??;
        eyre::ensure!(
            resolved.status() == TicketStatus::Resolved,
            "every ticket should resolve"
        );
    }

    let stats = shared.analytics.dashboard(&shared.cast.admin).await?;
    eyre::ensure!(stats.resolved() == 16, "all sixteen tickets resolved");
    Ok(())
}
