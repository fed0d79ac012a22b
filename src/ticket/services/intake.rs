//! Complaint intake: validate, classify, persist.

use super::{
    TicketServiceResult,
    events::{EventSink, publish},
};
use crate::{
    classification::{domain::ClassificationResult, ports::ComplaintClassifier},
    identity::domain::Principal,
    ticket::{
        domain::{AttachmentRef, NewTicket, Submission, Ticket, TicketDomainError},
        ports::{TicketEvent, TicketEventSink, TicketRepository},
    },
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Request payload for filing a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitComplaintRequest {
    title: String,
    description: String,
    location: String,
    #[serde(default)]
    attachments: Vec<String>,
}

impl SubmitComplaintRequest {
    /// Creates a request with the required text fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            attachments: Vec::new(),
        }
    }

    /// Sets attachment references.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = String>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }
}

/// Entry point for new complaints.
///
/// Validation happens before classification, and nothing is persisted
/// unless the whole submission is accepted.
#[derive(Clone)]
pub struct IntakeService<R, K, C>
where
    R: TicketRepository,
    K: ComplaintClassifier,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    classifier: Arc<K>,
    clock: Arc<C>,
    events: EventSink,
}

impl<R, K, C> IntakeService<R, K, C>
where
    R: TicketRepository,
    K: ComplaintClassifier,
    C: Clock + Send + Sync,
{
    /// Creates a new intake service.
    #[must_use]
    pub const fn new(repository: Arc<R>, classifier: Arc<K>, clock: Arc<C>) -> Self {
        Self {
            repository,
            classifier,
            clock,
            events: None,
        }
    }

    /// Publishes a [`TicketEvent::Submitted`] to `sink` after every filing.
    #[must_use]
    pub fn with_events(mut self, sink: Arc<dyn TicketEventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    /// Files a complaint on behalf of `submitter`.
    ///
    /// The description is classified to pick the department and priority;
    /// classification itself never fails. An event sink failure is logged
    /// and does not fail the submission.
    ///
    /// # Errors
    ///
    /// Returns [`super::TicketServiceError::Domain`] for blank required
    /// fields or attachment references, or
    /// [`super::TicketServiceError::Repository`] when persistence fails.
    pub async fn submit(
        &self,
        submitter: &Principal,
        request: SubmitComplaintRequest,
    ) -> TicketServiceResult<Ticket> {
        let attachments = request
            .attachments
            .into_iter()
            .map(AttachmentRef::new)
            .collect::<Result<Vec<_>, _>>()?;
        let submission = Submission::new(request.title, request.description, request.location)?
            .with_attachments(attachments);

        let classification = self.classifier.classify(submission.description());
        let draft = NewTicket::new(submitter, submission, classification, &*self.clock);
        let ticket = self.repository.create(draft).await?;

        info!(
            ticket = %ticket.number(),
            submitter = %ticket.submitter_id(),
            department = %ticket.department(),
            priority = %ticket.priority(),
            "complaint submitted"
        );
        publish(self.events.as_ref(), TicketEvent::Submitted(&ticket)).await;
        Ok(ticket)
    }

    /// Classifies free text without filing anything.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyClassificationText`] when the text
    /// is blank.
    pub fn classify_text(&self, text: &str) -> TicketServiceResult<ClassificationResult> {
        if text.trim().is_empty() {
            return Err(TicketDomainError::EmptyClassificationText.into());
        }
        Ok(self.classifier.classify(text))
    }
}
