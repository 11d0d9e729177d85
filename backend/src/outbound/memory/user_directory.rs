//! Read-only user directory.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::Username;
use crate::domain::ports::{IdentityRepository, IdentityRepositoryError, UserAccount};
use crate::domain::seed::{SeedError, seed_accounts};

/// User directory keyed by username.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    accounts: HashMap<Username, UserAccount>,
}

impl InMemoryUserDirectory {
    /// Build a directory from accounts; a later duplicate username wins.
    pub fn new(accounts: impl IntoIterator<Item = UserAccount>) -> Self {
        Self {
            accounts: accounts
                .into_iter()
                .map(|account| (account.identity.username().clone(), account))
                .collect(),
        }
    }

    /// Build the seeded directory.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(seed_accounts()?))
    }
}

#[async_trait]
impl IdentityRepository for InMemoryUserDirectory {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, IdentityRepositoryError> {
        Ok(self.accounts.get(username).cloned())
    }
}
