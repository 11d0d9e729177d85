//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Query`, `*Command`, [`LoginService`]) are what inbound
//! adapters call. Driven ports (`*Repository`) are what outbound adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod enrollment_repository;
mod enrollments_command;
mod enrollments_query;
mod identity_repository;
mod login_service;

#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError};
#[cfg(test)]
pub use enrollments_command::MockEnrollmentsCommand;
pub use enrollments_command::{EnrollmentChangeRequest, EnrollmentsCommand};
#[cfg(test)]
pub use enrollments_query::MockEnrollmentsQuery;
pub use enrollments_query::EnrollmentsQuery;
#[cfg(test)]
pub use identity_repository::MockIdentityRepository;
pub use identity_repository::{IdentityRepository, IdentityRepositoryError, UserAccount};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
