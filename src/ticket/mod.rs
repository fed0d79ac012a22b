//! Ticket intake and lifecycle management.
//!
//! Submissions are validated, classified and persisted as tickets with a
//! human-readable number; status changes then walk an explicit state machine
//! under per-ticket serialisation. Visibility is always scoped by the
//! caller's role. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
