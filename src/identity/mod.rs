//! Authenticated principals supplied by the identity collaborator.
//!
//! The grievance core never authenticates anyone itself. It trusts a
//! [`ports::PrincipalDirectory`] to turn a presented credential into a
//! [`domain::Principal`] whose role then scopes every read and mutation.

pub mod adapters;
pub mod domain;
pub mod ports;
