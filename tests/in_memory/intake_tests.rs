//! Integration tests for complaint intake and routing.

use super::helpers::{Harness, harness};
use grievance::{
    classification::domain::{Department, Sentiment, Urgency},
    ticket::{
        domain::{Priority, TicketDomainError, TicketStatus},
        services::{SubmitComplaintRequest, TicketServiceError},
    },
};
use rstest::rstest;

#[rstest]
#[case("No water supply for 2 days in our sector", Department::WaterSupply, Priority::High)]
#[case("Huge pothole near the bus stop", Department::PublicWorks, Priority::High)]
#[case("Street light not working", Department::Electricity, Priority::Medium)]
#[case("Garbage has not been collected", Department::Environment, Priority::Medium)]
#[case("Stray dogs near the school", Department::Other, Priority::Low)]
#[tokio::test(flavor = "multi_thread")]
async fn submission_is_routed_by_description(
    harness: Harness,
    #[case] description: &str,
    #[case] department: Department,
    #[case] priority: Priority,
) -> Result<(), eyre::Report> {
    let ticket = harness.submit(&harness.cast.citizen, description).await?;

    eyre::ensure!(ticket.department() == department, "department mismatch");
    eyre::ensure!(ticket.priority() == priority, "priority mismatch");
    eyre::ensure!(ticket.status() == TicketStatus::Submitted, "new tickets start submitted");
    eyre::ensure!(
        ticket.submitted_at() == ticket.updated_at(),
        "new tickets have not been updated"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn water_complaint_carries_full_classification(harness: Harness) -> Result<(), eyre::Report> {
    let ticket = harness
        .submit(
            &harness.cast.citizen,
            "No water supply for 2 days in our sector",
        )
        .await?;
    let classification = ticket
        .classification()
        .ok_or_else(|| eyre::eyre!("ticket should carry its classification"))?;

    eyre::ensure!(
        classification.predicted_department() == Department::WaterSupply,
        "predicted department mismatch"
    );
    eyre::ensure!(
        (classification.confidence_score().value() - 0.89).abs() < f64::EPSILON,
        "confidence mismatch"
    );
    eyre::ensure!(classification.urgency() == Urgency::High, "urgency mismatch");
    eyre::ensure!(
        classification.keywords() == ["water", "pipe", "leak"],
        "keywords mismatch"
    );
    eyre::ensure!(
        classification.sentiment() == Sentiment::Negative,
        "sentiment mismatch"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn earliest_rule_wins_for_mixed_descriptions(harness: Harness) -> Result<(), eyre::Report> {
    let ticket = harness
        .submit(
            &harness.cast.citizen,
            "Water leaking onto the road and the power is out",
        )
        .await?;

    eyre::ensure!(
        ticket.department() == Department::WaterSupply,
        "water rule precedes road and power rules"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn numbers_follow_submission_order(harness: Harness) -> Result<(), eyre::Report> {
    let first = harness.submit(&harness.cast.citizen, "Pipe burst").await?;
    let second = harness
        .submit(&harness.cast.other_citizen, "Power cut")
        .await?;

    eyre::ensure!(first.number().to_string() == "SMG-2026-0001", "first number");
    eyre::ensure!(second.number().to_string() == "SMG-2026-0002", "second number");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_submission_persists_nothing(harness: Harness) -> Result<(), eyre::Report> {
    let result = harness
        .intake
        .submit(
            &harness.cast.citizen,
            SubmitComplaintRequest::new("Leak", "Water leak", "   "),
        )
        .await;

    eyre::ensure!(
        matches!(
            result,
            Err(TicketServiceError::Domain(TicketDomainError::EmptyLocation))
        ),
        "expected EmptyLocation, got {result:?}"
    );
    let visible = harness.lifecycle.list(&harness.cast.admin).await?;
    eyre::ensure!(visible.is_empty(), "nothing should be stored");

    let next = harness.submit(&harness.cast.citizen, "Water leak").await?;
    eyre::ensure!(
        next.number().sequence() == 1,
        "failed submissions must not consume numbers"
    );
    Ok(())
}
