//! Driven port for the user directory.

use async_trait::async_trait;

use crate::domain::{Identity, PasswordDigest, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user directory adapters.
    pub enum IdentityRepositoryError {
        /// The directory cannot be accessed.
        Unavailable { message: String } => "user directory unavailable: {message}",
    }
}

/// A directory entry: who the user is and how to check their password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub identity: Identity,
    pub password_digest: PasswordDigest,
}

/// Port for looking up users by login name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Return the account for `username`, or `None` when no user has it.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<UserAccount>, IdentityRepositoryError>;
}
