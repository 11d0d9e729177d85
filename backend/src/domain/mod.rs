//! Enrollment domain: identifiers, records, the access policy, and the
//! services that drive the store through ports.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure taxonomy.
//! - [`StudentId`], [`CourseId`], [`Student`], [`Enrollment`]: validated
//!   enrollment data.
//! - [`Identity`], [`Role`], [`Username`]: who is calling.
//! - [`access_policy::decide`]: the pure allow/deny rule.
//! - [`EnrollmentService`], [`IdentityService`]: use-cases behind the
//!   driving ports in [`ports`].

pub mod access_policy;
mod auth;
mod enrollment;
mod enrollment_service;
pub mod error;
mod identity_service;
pub mod ports;
pub mod seed;
mod student;
mod trace_id;
mod user;

pub use self::auth::{LoginCredentials, LoginValidationError, PasswordDigest};
pub use self::enrollment::{Enrollment, EnrollmentSnapshot, StudentEnrollments};
pub use self::enrollment_service::EnrollmentService;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::identity_service::IdentityService;
pub use self::student::{
    COURSE_ID_LEN, CourseId, EnrollmentValidationError, STUDENT_ID_LEN, Student, StudentId,
};
pub use self::trace_id::TraceId;
pub use self::user::{Identity, Role, USERNAME_MAX, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
