//! Fixed token directory for development deployments and tests.

use crate::identity::{
    domain::Principal,
    ports::{DirectoryResult, PrincipalDirectory},
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Directory backed by a fixed token table.
#[derive(Debug, Clone, Default)]
pub struct StaticPrincipalDirectory {
    principals: HashMap<String, Principal>,
}

impl StaticPrincipalDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token for a principal, replacing any previous owner.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>, principal: Principal) -> Self {
        self.principals.insert(token.into(), principal);
        self
    }

    /// Returns the number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.principals.len()
    }

    /// Returns whether no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

impl FromIterator<(String, Principal)> for StaticPrincipalDirectory {
    fn from_iter<T: IntoIterator<Item = (String, Principal)>>(iter: T) -> Self {
        Self {
            principals: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl PrincipalDirectory for StaticPrincipalDirectory {
    async fn resolve(&self, token: &str) -> DirectoryResult<Option<Principal>> {
        Ok(self.principals.get(token.trim()).cloned())
    }
}
