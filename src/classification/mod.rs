//! Complaint triage by explainable keyword rules.
//!
//! Free-text descriptions are routed to a responsible department together
//! with an urgency estimate, a static confidence score and a coarse
//! sentiment. Classification is total: text that matches no rule degrades to
//! the `OTHER` department instead of failing, so intake is never blocked by
//! triage.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
