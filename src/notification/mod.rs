//! Citizen notifications about their complaints.
//!
//! A notification is written whenever a complaint is filed and whenever its
//! status changes, addressed to the submitter. Recipients list their inbox
//! and mark entries read; nobody else can see them.
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
