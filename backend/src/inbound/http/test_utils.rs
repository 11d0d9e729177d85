//! Test helpers for inbound HTTP components.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use super::auth::TokenIssuer;
use super::error::json_error_handler;
use super::state::HttpState;
use crate::domain::Username;
use crate::domain::ports::{
    EnrollmentsCommand, EnrollmentsQuery, LoginService, MockEnrollmentsCommand,
    MockEnrollmentsQuery,
};
use crate::domain::{EnrollmentService, IdentityService};
use crate::outbound::memory::{InMemoryEnrollmentStore, InMemoryUserDirectory};

/// HMAC secret shared by test issuers.
pub const TEST_SECRET: &[u8] = b"test-secret-test-secret-test-sec";

/// Token issuer with a short lifetime and the shared test secret.
pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET, Duration::from_secs(300))
}

/// `Authorization` header value for `username`.
pub fn bearer_for(username: &str) -> String {
    let username = Username::new(username).expect("valid test username");
    let token = test_issuer().issue(&username).expect("test token");
    format!("Bearer {token}")
}

/// JSON extractor config matching production routing.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

/// Build state from the given ports; absent ones are mocks with no
/// expectations, so any call to them fails the test.
pub fn state_with(
    login: Arc<dyn LoginService>,
    enrollments: Option<Arc<dyn EnrollmentsQuery>>,
    enrollment_changes: Option<Arc<dyn EnrollmentsCommand>>,
) -> HttpState {
    HttpState::new(
        login,
        enrollments.unwrap_or_else(|| Arc::new(MockEnrollmentsQuery::new())),
        enrollment_changes.unwrap_or_else(|| Arc::new(MockEnrollmentsCommand::new())),
    )
}

/// State wired to a fresh seeded store and user directory.
pub fn seeded_state() -> HttpState {
    let store = Arc::new(InMemoryEnrollmentStore::seeded().expect("seed store"));
    let directory = Arc::new(InMemoryUserDirectory::seeded().expect("seed directory"));
    let service = Arc::new(EnrollmentService::new(store, directory.clone()));
    HttpState::new(
        Arc::new(IdentityService::new(directory)),
        service.clone(),
        service,
    )
}
