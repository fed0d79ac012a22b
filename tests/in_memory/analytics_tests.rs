//! Integration tests for dashboard statistics over live tickets.

use super::helpers::{Harness, harness};
use grievance::analytics::services::AnalyticsError;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_counts_by_status(harness: Harness) -> Result<(), eyre::Report> {
    let cast = &harness.cast;
    let resolved = harness.submit(&cast.citizen, "Water leak").await?;
    let closed = harness.submit(&cast.citizen, "Pipe burst").await?;
    let rejected = harness.submit(&cast.citizen, "Leak again").await?;
    harness.submit(&cast.citizen, "Power cut").await?;

    harness
        .walk(&cast.admin, &resolved, &["ASSIGNED", "IN_PROGRESS", "RESOLVED"])
        .await?;
    harness
        .walk(
            &cast.admin,
            &closed,
            &["ASSIGNED", "IN_PROGRESS", "RESOLVED", "CLOSED"],
        )
        .await?;
    harness.walk(&cast.admin, &rejected, &["REJECTED"]).await?;

    let stats = harness.analytics.dashboard(&cast.admin).await?;
    eyre::ensure!(stats.total() == 4, "total");
    eyre::ensure!(stats.resolved() == 1, "resolved");
    eyre::ensure!(stats.closed() == 1, "closed");
    eyre::ensure!(stats.rejected() == 1, "rejected");
    eyre::ensure!(
        stats.pending() == stats.total() - stats.resolved() - stats.closed(),
        "pending is everything not resolved or closed"
    );
    eyre::ensure!(
        stats.avg_resolution_time().is_some(),
        "resolved and closed tickets contribute a mean"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn closing_a_resolved_ticket_extends_its_resolution_time(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let cast = &harness.cast;
    let filed = harness.submit(&cast.citizen, "Water leak").await?;
    let resolved = harness
        .walk(&cast.admin, &filed, &["ASSIGNED", "IN_PROGRESS", "RESOLVED"])
        .await?;
    let closed = harness.move_to(&cast.admin, &resolved, "CLOSED").await?;

    let stats = harness.analytics.dashboard(&cast.admin).await?;
    let to_close = closed.updated_at() - closed.submitted_at();
    let to_resolve = resolved.updated_at() - resolved.submitted_at();
    eyre::ensure!(to_close > to_resolve, "closing happens after resolving");
    eyre::ensure!(
        stats.avg_resolution_time() == Some(to_close),
        "expected {to_close:?}, got {:?}",
        stats.avg_resolution_time()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn officer_dashboard_covers_own_department(harness: Harness) -> Result<(), eyre::Report> {
    let cast = &harness.cast;
    harness.submit(&cast.citizen, "Water leak").await?;
    harness.submit(&cast.citizen, "Street light out").await?;
    harness.submit(&cast.citizen, "Power line down").await?;

    let water = harness.analytics.dashboard(&cast.water_officer).await?;
    let power = harness.analytics.dashboard(&cast.power_officer).await?;
    let everything = harness.analytics.dashboard(&cast.admin).await?;

    eyre::ensure!(water.total() == 1, "water officer sees one ticket");
    eyre::ensure!(power.total() == 2, "power officer sees two tickets");
    eyre::ensure!(everything.total() == 3, "administrator sees all tickets");
    eyre::ensure!(
        everything.avg_resolution_label() == "N/A",
        "nothing resolved yet"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn citizens_are_denied_the_dashboard(harness: Harness) -> Result<(), eyre::Report> {
    let result = harness.analytics.dashboard(&harness.cast.citizen).await;
    eyre::ensure!(
        matches!(result, Err(AnalyticsError::AccessDenied(id)) if id == harness.cast.citizen.id()),
        "expected AccessDenied"
    );
    Ok(())
}
