//! Derived dashboard metrics.

use crate::ticket::domain::{Ticket, TicketStatus};
use chrono::{DateTime, TimeDelta, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HALF_DAY: i64 = 43_200;

/// Aggregate counts and mean resolution time for a ticket population.
///
/// `pending` counts every ticket that is neither `RESOLVED` nor `CLOSED`, so
/// `pending == total - resolved - closed` always holds. `REJECTED` tickets are
/// pending in that sense and are also reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    total: usize,
    pending: usize,
    resolved: usize,
    closed: usize,
    rejected: usize,
    avg_resolution_time: Option<TimeDelta>,
}

impl DashboardStats {
    /// Computes statistics by scanning `tickets` once.
    ///
    /// Resolution time runs from submission to the last update for tickets
    /// currently `RESOLVED` or `CLOSED`. Tickets reopened after a resolution
    /// still count, measured up to their latest entry into `RESOLVED`.
    #[must_use]
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut stats = Self::default();
        let mut resolution_seconds: i64 = 0;
        let mut samples: i64 = 0;

        for ticket in tickets {
            stats.total += 1;
            match ticket.status() {
                TicketStatus::Resolved => stats.resolved += 1,
                TicketStatus::Closed => stats.closed += 1,
                TicketStatus::Rejected => stats.rejected += 1,
                TicketStatus::Submitted | TicketStatus::Assigned | TicketStatus::InProgress => {}
            }
            if !matches!(
                ticket.status(),
                TicketStatus::Resolved | TicketStatus::Closed
            ) {
                stats.pending += 1;
            }
            if let Some(ended_at) = resolution_end(ticket) {
                let elapsed = (ended_at - ticket.submitted_at()).max(TimeDelta::zero());
                resolution_seconds = resolution_seconds.saturating_add(elapsed.num_seconds());
                samples += 1;
            }
        }

        stats.avg_resolution_time = resolution_seconds
            .checked_div(samples)
            .and_then(TimeDelta::try_seconds);
        stats
    }

    /// Returns the number of tickets in scope.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of tickets neither resolved nor closed.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pending
    }

    /// Returns the number of tickets currently `RESOLVED`.
    #[must_use]
    pub const fn resolved(&self) -> usize {
        self.resolved
    }

    /// Returns the number of tickets currently `CLOSED`.
    #[must_use]
    pub const fn closed(&self) -> usize {
        self.closed
    }

    /// Returns the number of tickets currently `REJECTED`.
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Returns the mean resolution time, or `None` when nothing has been
    /// resolved.
    #[must_use]
    pub const fn avg_resolution_time(&self) -> Option<TimeDelta> {
        self.avg_resolution_time
    }

    /// Formats the mean resolution time in days with one decimal, e.g.
    /// `1.8 days`, or `N/A`.
    #[must_use]
    pub fn avg_resolution_label(&self) -> String {
        let Some(average) = self.avg_resolution_time else {
            return "N/A".to_owned();
        };
        let tenths = average
            .num_seconds()
            .saturating_mul(10)
            .saturating_add(SECONDS_PER_HALF_DAY)
            .checked_div(SECONDS_PER_DAY)
            .unwrap_or_default();
        let whole = tenths.checked_div(10).unwrap_or_default();
        let fraction = tenths.checked_rem(10).unwrap_or_default();
        format!("{whole}.{fraction} days")
    }
}

fn resolution_end(ticket: &Ticket) -> Option<DateTime<Utc>> {
    match ticket.status() {
        TicketStatus::Resolved | TicketStatus::Closed => Some(ticket.updated_at()),
        TicketStatus::Submitted
        | TicketStatus::Assigned
        | TicketStatus::InProgress
        | TicketStatus::Rejected => ticket.resolved_at(),
    }
}

impl Serialize for DashboardStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DashboardStats", 7)?;
        state.serialize_field("total", &self.total)?;
        state.serialize_field("pending", &self.pending)?;
        state.serialize_field("resolved", &self.resolved)?;
        state.serialize_field("closed", &self.closed)?;
        state.serialize_field("rejected", &self.rejected)?;
        state.serialize_field(
            "avg_resolution_secs",
            &self.avg_resolution_time.map(|average| average.num_seconds()),
        )?;
        state.serialize_field("avg_resolution_time", &self.avg_resolution_label())?;
        state.end()
    }
}
