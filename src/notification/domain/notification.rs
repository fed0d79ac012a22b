//! Notification records addressed to a complaint's submitter.

use crate::{
    identity::domain::PrincipalId,
    ticket::domain::{Ticket, TicketNumber},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique notification identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    /// Creates a new random notification identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a notification identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses the hyphenated UUID form, returning `None` for anything else.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happened to the complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The complaint was filed and routed.
    ComplaintSubmitted,
    /// The complaint moved to a new status.
    StatusUpdated,
}

/// One inbox entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    recipient: PrincipalId,
    ticket: TicketNumber,
    kind: NotificationKind,
    message: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl Notification {
    /// Tells the submitter where a freshly filed complaint was routed.
    #[must_use]
    pub fn complaint_submitted(ticket: &Ticket, clock: &impl Clock) -> Self {
        let message = format!(
            "Your complaint {} has been submitted and routed to {}",
            ticket.number(),
            ticket.department()
        );
        Self::unread(ticket, NotificationKind::ComplaintSubmitted, message, clock)
    }

    /// Tells the submitter about the complaint's new status.
    #[must_use]
    pub fn status_updated(ticket: &Ticket, clock: &impl Clock) -> Self {
        let message = format!(
            "Your complaint {} status has been updated to {}",
            ticket.number(),
            ticket.status()
        );
        Self::unread(ticket, NotificationKind::StatusUpdated, message, clock)
    }

    fn unread(
        ticket: &Ticket,
        kind: NotificationKind,
        message: String,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            recipient: ticket.submitter_id(),
            ticket: ticket.number().clone(),
            kind,
            message,
            is_read: false,
            created_at: clock.utc(),
        }
    }

    /// Returns the notification identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the addressed principal.
    #[must_use]
    pub const fn recipient(&self) -> PrincipalId {
        self.recipient
    }

    /// Returns the complaint the notification is about.
    #[must_use]
    pub const fn ticket(&self) -> &TicketNumber {
        &self.ticket
    }

    /// Returns the notification kind.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether the recipient has read the notification.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.is_read
    }

    /// Returns the creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the notification read. Repeated calls are harmless.
    pub const fn mark_read(&mut self) {
        self.is_read = true;
    }
}
