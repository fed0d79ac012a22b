//! Port contracts for ticket persistence and event delivery.
//!
//! Ports define infrastructure-agnostic interfaces used by ticket services.

pub mod events;
pub mod repository;

pub use events::{TicketEvent, TicketEventError, TicketEventSink};
pub use repository::{TicketRepository, TicketRepositoryError, TicketRepositoryResult};
