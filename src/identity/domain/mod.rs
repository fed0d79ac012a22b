//! Domain model for callers of the grievance core.

mod principal;

pub use principal::{Principal, PrincipalId, Role};
