//! In-memory adapters for ticket ports.

mod ticket;

pub use ticket::InMemoryTicketRepository;
