//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{EnrollmentsCommand, EnrollmentsQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub enrollments: Arc<dyn EnrollmentsQuery>,
    pub enrollment_changes: Arc<dyn EnrollmentsCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{EnrollmentService, IdentityService};
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::{InMemoryEnrollmentStore, InMemoryUserDirectory};
    ///
    /// let store = Arc::new(InMemoryEnrollmentStore::seeded().unwrap());
    /// let directory = Arc::new(InMemoryUserDirectory::seeded().unwrap());
    /// let service = Arc::new(EnrollmentService::new(store, directory.clone()));
    /// let state = HttpState::new(
    ///     Arc::new(IdentityService::new(directory)),
    ///     service.clone(),
    ///     service,
    /// );
    /// let _ = state.enrollments.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        enrollments: Arc<dyn EnrollmentsQuery>,
        enrollment_changes: Arc<dyn EnrollmentsCommand>,
    ) -> Self {
        Self {
            login,
            enrollments,
            enrollment_changes,
        }
    }
}
