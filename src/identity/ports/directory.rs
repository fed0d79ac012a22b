//! Credential-to-principal resolution port.

use crate::identity::domain::Principal;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory lookups.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Resolves bearer credentials issued by the identity provider.
#[async_trait]
pub trait PrincipalDirectory: Send + Sync {
    /// Resolves a bearer token.
    ///
    /// Returns `None` when the token is unknown or expired.
    async fn resolve(&self, token: &str) -> DirectoryResult<Option<Principal>>;
}

/// Errors returned by directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// The identity provider could not be reached or answered garbage.
    #[error("identity provider error: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a provider error.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
