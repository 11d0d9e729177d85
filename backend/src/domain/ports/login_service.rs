//! Driving port for login.
//!
//! Inbound adapters call this to check credentials without knowing where
//! accounts are stored.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Username};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the canonical username.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Username, Error>;
}
