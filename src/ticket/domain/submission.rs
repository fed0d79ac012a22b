//! Validated complaint submission.

use super::{AttachmentRef, TicketDomainError};
use serde::{Deserialize, Serialize};

/// Submitter-provided complaint text, validated before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    title: String,
    description: String,
    location: String,
    attachments: Vec<AttachmentRef>,
}

impl Submission {
    /// Creates a submission from required text fields.
    ///
    /// # Errors
    ///
    /// Returns [`TicketDomainError::EmptyTitle`],
    /// [`TicketDomainError::EmptyDescription`] or
    /// [`TicketDomainError::EmptyLocation`] for the first blank field.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self, TicketDomainError> {
        Ok(Self {
            title: required(title.into(), TicketDomainError::EmptyTitle)?,
            description: required(description.into(), TicketDomainError::EmptyDescription)?,
            location: required(location.into(), TicketDomainError::EmptyLocation)?,
            attachments: Vec::new(),
        })
    }

    /// Sets attachment references, keeping their order.
    #[must_use]
    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = AttachmentRef>) -> Self {
        self.attachments = attachments.into_iter().collect();
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns attachment references.
    #[must_use]
    pub fn attachments(&self) -> &[AttachmentRef] {
        &self.attachments
    }
}

fn required(value: String, missing: TicketDomainError) -> Result<String, TicketDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(missing);
    }
    Ok(trimmed.to_owned())
}
