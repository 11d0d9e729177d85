//! Driving port for enrollment mutations.

use async_trait::async_trait;

use crate::domain::{Enrollment, Error, StudentId, Username};

/// Add or drop request addressed to one student's record.
///
/// `target` comes from the request path and `enrollment` from the body. The
/// two student ids are kept apart so the access policy can compare them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentChangeRequest {
    pub caller: Username,
    pub target: StudentId,
    pub enrollment: Enrollment,
}

/// Domain use-case port for enrollment writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentsCommand: Send + Sync {
    /// Restore the seeded baseline.
    async fn reset(&self, caller: &Username) -> Result<(), Error>;

    /// Enroll a student in a course and return the created record.
    async fn add_enrollment(&self, request: EnrollmentChangeRequest) -> Result<Enrollment, Error>;

    /// Drop a course and return the student's remaining enrollments.
    async fn drop_enrollment(
        &self,
        request: EnrollmentChangeRequest,
    ) -> Result<Vec<Enrollment>, Error>;
}
