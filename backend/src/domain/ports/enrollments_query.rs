//! Driving port for reading enrollments.

use async_trait::async_trait;

use crate::domain::{Error, Student, StudentEnrollments, StudentId, Username};

/// Domain use-case port for enrollment reads.
///
/// Every call names the authenticated caller; implementations resolve the
/// caller's identity and apply the access policy before touching the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentsQuery: Send + Sync {
    /// Every student with the course ids from their enrollment records.
    async fn list_enrollments(&self, caller: &Username) -> Result<Vec<StudentEnrollments>, Error>;

    /// One student's full record.
    async fn get_student(&self, caller: &Username, student_id: &StudentId)
    -> Result<Student, Error>;
}
