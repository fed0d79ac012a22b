//! Role-derived ticket visibility.

use super::Ticket;
use crate::{
    classification::domain::Department,
    identity::domain::{Principal, PrincipalId, Role},
};

/// Population of tickets a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketScope {
    /// Every ticket.
    All,
    /// Tickets filed by one principal.
    Submitter(PrincipalId),
    /// Tickets routed to one department.
    Department(Department),
}

impl TicketScope {
    /// Derives the scope a principal's role grants.
    ///
    /// Citizens see their own tickets, officers their department's queue and
    /// administrators everything.
    #[must_use]
    pub const fn for_principal(principal: &Principal) -> Self {
        match principal.role() {
            Role::Citizen => Self::Submitter(principal.id()),
            Role::Officer { department } => Self::Department(department),
            Role::Administrator => Self::All,
        }
    }

    /// Returns whether `ticket` falls inside this scope.
    #[must_use]
    pub fn includes(&self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::Submitter(submitter_id) => ticket.submitter_id() == *submitter_id,
            Self::Department(department) => ticket.department() == *department,
        }
    }
}
