//! Identity resolution and login against the user directory.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{IdentityRepository, IdentityRepositoryError, LoginService};
use crate::domain::{Error, Identity, LoginCredentials, Username};

/// Resolves authenticated usernames and checks login credentials.
#[derive(Clone)]
pub struct IdentityService<I> {
    directory: Arc<I>,
}

impl<I> IdentityService<I> {
    /// Create a service over the given directory.
    pub fn new(directory: Arc<I>) -> Self {
        Self { directory }
    }
}

impl<I> IdentityService<I>
where
    I: IdentityRepository,
{
    fn map_directory_error(error: IdentityRepositoryError) -> Error {
        match error {
            IdentityRepositoryError::Unavailable { message } => {
                Error::internal(format!("user directory unavailable: {message}"))
            }
        }
    }

    /// Resolve the identity behind an authenticated username.
    ///
    /// A valid credential can outlive its account, so a missing record is
    /// reported as unauthorised rather than not found.
    pub async fn resolve(&self, username: &Username) -> Result<Identity, Error> {
        let account = self
            .directory
            .find_by_username(username)
            .await
            .map_err(Self::map_directory_error)?;
        match account {
            Some(account) => Ok(account.identity),
            None => {
                warn!(%username, "credential names an unknown user");
                Err(Error::unauthorized("Unauthorized user"))
            }
        }
    }
}

#[async_trait]
impl<I> LoginService for IdentityService<I>
where
    I: IdentityRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Username, Error> {
        let account = self
            .directory
            .find_by_username(credentials.username())
            .await
            .map_err(Self::map_directory_error)?;
        match account {
            Some(account) if account.password_digest.matches(credentials.password()) => {
                Ok(account.identity.username().clone())
            }
            _ => Err(Error::unauthorized("invalid credentials")),
        }
    }
}
