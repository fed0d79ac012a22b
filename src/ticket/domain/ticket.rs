//! Ticket aggregate root and lifecycle types.

use super::{AttachmentRef, Priority, Submission, TicketDomainError, TicketNumber, TicketStatus};
use crate::{
    classification::domain::{ClassificationResult, Department},
    identity::domain::{Principal, PrincipalId},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated, classified submission awaiting a ticket number.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    submitter_id: PrincipalId,
    submitter_name: String,
    submission: Submission,
    classification: ClassificationResult,
    submitted_at: DateTime<Utc>,
}

impl NewTicket {
    /// Stamps a classified submission with its filing principal and time.
    #[must_use]
    pub fn new(
        submitter: &Principal,
        submission: Submission,
        classification: ClassificationResult,
        clock: &impl Clock,
    ) -> Self {
        Self {
            submitter_id: submitter.id(),
            submitter_name: submitter.display_name().to_owned(),
            submission,
            classification,
            submitted_at: clock.utc(),
        }
    }

    /// Returns the filing principal.
    #[must_use]
    pub const fn submitter_id(&self) -> PrincipalId {
        self.submitter_id
    }

    /// Returns the submission time.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns the routed department.
    #[must_use]
    pub const fn department(&self) -> Department {
        self.classification.predicted_department()
    }
}

/// Requested status change, stamped with the requesting principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTransition {
    target: TicketStatus,
    actor: PrincipalId,
    comment: Option<String>,
    requested_at: DateTime<Utc>,
}

impl StatusTransition {
    /// Creates a transition request timed by `clock`.
    #[must_use]
    pub fn new(target: TicketStatus, actor: PrincipalId, clock: &impl Clock) -> Self {
        Self::at(target, actor, clock.utc())
    }

    /// Creates a transition request at an explicit time.
    #[must_use]
    pub const fn at(target: TicketStatus, actor: PrincipalId, requested_at: DateTime<Utc>) -> Self {
        Self {
            target,
            actor,
            comment: None,
            requested_at,
        }
    }

    /// Attaches an officer comment; blank comments are dropped.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        let raw = comment.into();
        let trimmed = raw.trim();
        self.comment = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Returns the requested status.
    #[must_use]
    pub const fn target(&self) -> TicketStatus {
        self.target
    }

    /// Returns the requesting principal.
    #[must_use]
    pub const fn actor(&self) -> PrincipalId {
        self.actor
    }
}

/// One entry of a ticket's append-only status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Previous status; `None` for the initial submission entry.
    pub from: Option<TicketStatus>,
    /// Status entered.
    pub to: TicketStatus,
    /// Principal who caused the change.
    pub actor: PrincipalId,
    /// Optional free-text note.
    pub comment: Option<String>,
    /// Time the change was committed.
    pub changed_at: DateTime<Utc>,
}

/// Ticket aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    number: TicketNumber,
    submitter_id: PrincipalId,
    submitter_name: String,
    title: String,
    description: String,
    location: String,
    department: Department,
    status: TicketStatus,
    priority: Priority,
    classification: Option<ClassificationResult>,
    attachments: Vec<AttachmentRef>,
    submitted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
    history: Vec<StatusChange>,
}

/// Parameter object for reconstructing a persisted ticket aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTicketData {
    /// Persisted ticket number.
    pub number: TicketNumber,
    /// Persisted filing principal.
    pub submitter_id: PrincipalId,
    /// Persisted submitter display name.
    pub submitter_name: String,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted location.
    pub location: String,
    /// Persisted routed department.
    pub department: Department,
    /// Persisted lifecycle status.
    pub status: TicketStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted classification, absent for tickets filed before triage.
    pub classification: Option<ClassificationResult>,
    /// Persisted attachment references.
    pub attachments: Vec<AttachmentRef>,
    /// Persisted submission timestamp.
    pub submitted_at: DateTime<Utc>,
    /// Persisted latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted time of the latest entry into `RESOLVED`.
    pub resolved_at: Option<DateTime<Utc>>,
    /// Persisted status history.
    pub history: Vec<StatusChange>,
}

impl Ticket {
    /// Opens a ticket for a classified submission.
    ///
    /// Department and priority come from the classification; the status
    /// starts at [`TicketStatus::Submitted`].
    #[must_use]
    pub fn open(number: TicketNumber, draft: NewTicket) -> Self {
        let NewTicket {
            submitter_id,
            submitter_name,
            submission,
            classification,
            submitted_at,
        } = draft;
        let initial = StatusChange {
            from: None,
            to: TicketStatus::Submitted,
            actor: submitter_id,
            comment: Some("Initial complaint submission".to_owned()),
            changed_at: submitted_at,
        };

        Self {
            number,
            submitter_id,
            submitter_name,
            title: submission.title().to_owned(),
            description: submission.description().to_owned(),
            location: submission.location().to_owned(),
            department: classification.predicted_department(),
            status: TicketStatus::Submitted,
            priority: Priority::from(classification.urgency()),
            attachments: submission.attachments().to_vec(),
            classification: Some(classification),
            submitted_at,
            updated_at: submitted_at,
            resolved_at: None,
            history: vec![initial],
        }
    }

    /// Reconstructs a ticket from persisted storage.
    ///
    /// A persisted `updated_at` earlier than `submitted_at` is clamped so the
    /// timestamp ordering invariant holds.
    #[must_use]
    pub fn from_persisted(data: PersistedTicketData) -> Self {
        Self {
            number: data.number,
            submitter_id: data.submitter_id,
            submitter_name: data.submitter_name,
            title: data.title,
            description: data.description,
            location: data.location,
            department: data.department,
            status: data.status,
            priority: data.priority,
            classification: data.classification,
            attachments: data.attachments,
            submitted_at: data.submitted_at,
            updated_at: data.updated_at.max(data.submitted_at),
            resolved_at: data.resolved_at,
            history: data.history,
        }
    }

    /// Returns the ticket number.
    #[must_use]
    pub const fn number(&self) -> &TicketNumber {
        &self.number
    }

    /// Returns the filing principal.
    #[must_use]
    pub const fn submitter_id(&self) -> PrincipalId {
        self.submitter_id
    }

    /// Returns the submitter's display name at filing time.
    #[must_use]
    pub fn submitter_name(&self) -> &str {
        &self.submitter_name
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the routed department.
    #[must_use]
    pub const fn department(&self) -> Department {
        self.department
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TicketStatus {
        self.status
    }

    /// Returns the triage priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the classification recorded at intake.
    #[must_use]
    pub const fn classification(&self) -> Option<&ClassificationResult> {
        self.classification.as_ref()
    }

    /// Returns attachment references.
    #[must_use]
    pub fn attachments(&self) -> &[AttachmentRef] {
        &self.attachments
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the ticket last entered `RESOLVED`, if ever.
    #[must_use]
    pub const fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    /// Returns the status history, oldest first.
    #[must_use]
    pub fn history(&self) -> &[StatusChange] {
        &self.history
    }

    /// Applies a status transition.
    ///
    /// The commit time never precedes the previous `updated_at`, so the
    /// timestamp stays monotonic even if the caller's clock steps back.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidStateTransition`] when the move is
    /// not in the legal transition table, including any move out of a
    /// terminal status. The ticket is left unchanged.
    pub fn apply(&mut self, transition: &StatusTransition) -> Result<(), TicketDomainError> {
        let from = self.status;
        let to = transition.target;
        if !from.can_transition_to(to) {
            return Err(TicketDomainError::InvalidStateTransition {
                ticket: self.number.clone(),
                from,
                to,
            });
        }

        let changed_at = transition.requested_at.max(self.updated_at);
        self.status = to;
        self.updated_at = changed_at;
        if to == TicketStatus::Resolved {
            self.resolved_at = Some(changed_at);
        }
        self.history.push(StatusChange {
            from: Some(from),
            to,
            actor: transition.actor,
            comment: transition.comment.clone(),
            changed_at,
        });
        Ok(())
    }

    /// Applies a status transition timed by `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::InvalidStateTransition`] as for
    /// [`Ticket::apply`].
    pub fn transition_to(
        &mut self,
        target: TicketStatus,
        actor: PrincipalId,
        clock: &impl Clock,
    ) -> Result<(), TicketDomainError> {
        self.apply(&StatusTransition::new(target, actor, clock))
    }
}
