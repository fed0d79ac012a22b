//! Dashboard statistics over the ticket population.
//!
//! Statistics are a pure projection recomputed on every request; nothing is
//! cached or stored.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;
