//! Unit tests for notification inboxes.


use crate::{
    classification::{adapters::KeywordRuleClassifier, ports::ComplaintClassifier},
    identity::domain::Principal,
    ticket::domain::{NewTicket, Submission, Ticket, TicketNumber, TicketPrefix},
};
use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI32, Ordering};

/// Clock that advances one second on every reading.
struct TickingClock {
    start: DateTime<Utc>,
    ticks: AtomicI32,
}

impl Default for TickingClock {
    fn default() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2026, 8, 3, 8, 30, 0)
                .single()
                .expect("valid start timestamp"),
            ticks: AtomicI32::new(0),
        }
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::seconds(i64::from(tick))
    }
}

fn filed_ticket(submitter: &Principal, sequence: u64, description: &str) -> Ticket {
    let submission =
        Submission::new("Complaint", description, "Ward 3").expect("valid submission");
    let classification = KeywordRuleClassifier::default().classify(submission.description());
    let draft = NewTicket::new(submitter, submission, classification, &TickingClock::default());
    Ticket::open(
        TicketNumber::from_parts(TicketPrefix::default(), 2026, sequence),
        draft,
    )
}
