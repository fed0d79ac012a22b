//! Role-scoped dashboard computation.

use crate::{
    analytics::domain::DashboardStats,
    identity::domain::{Principal, PrincipalId, Role},
    ticket::{
        domain::TicketScope,
        ports::{TicketRepository, TicketRepositoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for statistics requests.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Repository scan failed.
    #[error(transparent)]
    Repository(#[from] TicketRepositoryError),
    /// Citizens have no access to oversight statistics.
    #[error("principal {0} may not view analytics")]
    AccessDenied(PrincipalId),
}

/// Result type for analytics service operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Computes dashboard statistics from the repository on every call.
#[derive(Clone)]
pub struct AnalyticsService<R>
where
    R: TicketRepository,
{
    repository: Arc<R>,
}

impl<R> AnalyticsService<R>
where
    R: TicketRepository,
{
    /// Creates a new analytics service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns statistics over the population visible to `viewer`.
    ///
    /// Officers see their department's figures, administrators the whole
    /// population.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::AccessDenied`] for citizens and
    /// [`AnalyticsError::Repository`] when the scan fails.
    pub async fn dashboard(&self, viewer: &Principal) -> AnalyticsResult<DashboardStats> {
        if viewer.role() == Role::Citizen {
            return Err(AnalyticsError::AccessDenied(viewer.id()));
        }
        self.stats_for(&TicketScope::for_principal(viewer)).await
    }

    /// Returns statistics over an explicit scope.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Repository`] when the scan fails.
    pub async fn stats_for(&self, scope: &TicketScope) -> AnalyticsResult<DashboardStats> {
        let tickets = self.repository.list(scope).await?;
        let stats = DashboardStats::from_tickets(&tickets);
        debug!(
            ?scope,
            total = stats.total(),
            pending = stats.pending(),
            resolved = stats.resolved(),
            "dashboard statistics computed"
        );
        Ok(stats)
    }
}
