//! Wiring of the in-memory adapters into the HTTP port bundle.

use std::sync::Arc;

use backend::domain::seed::SeedError;
use backend::domain::{EnrollmentService, IdentityService};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::{InMemoryEnrollmentStore, InMemoryUserDirectory};

/// Build handler state over freshly seeded adapters.
///
/// The login port and both enrollment ports share one user directory, so a
/// user removed from it loses access on their next request.
pub(crate) fn build_http_state() -> Result<HttpState, SeedError> {
    let store = Arc::new(InMemoryEnrollmentStore::seeded()?);
    let directory = Arc::new(InMemoryUserDirectory::seeded()?);
    let enrollments = Arc::new(EnrollmentService::new(store, directory.clone()));
    Ok(HttpState::new(
        Arc::new(IdentityService::new(directory)),
        enrollments.clone(),
        enrollments,
    ))
}
