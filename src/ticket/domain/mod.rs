//! Domain model for grievance tickets.
//!
//! The ticket aggregate owns its lifecycle rules: write-once submission data,
//! a legal-transition table over statuses and monotonic timestamps. Nothing
//! here touches storage.

mod error;
mod ids;
mod number;
mod scope;
mod status;
mod submission;
mod ticket;

pub use error::{ParsePriorityError, ParseTicketStatusError, TicketDomainError};
pub use ids::{AttachmentRef, TicketNumber, TicketPrefix};
pub use number::TicketNumberSequence;
pub use scope::TicketScope;
pub use status::{Priority, TicketStatus};
pub use submission::Submission;
pub use ticket::{NewTicket, PersistedTicketData, StatusChange, StatusTransition, Ticket};
