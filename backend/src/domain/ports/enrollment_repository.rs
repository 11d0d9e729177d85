//! Driven port for the enrollment store.
//!
//! The store owns two views of the same facts: each [`Student`] embeds its
//! course ids and a flat list of [`Enrollment`] records pairs students with
//! courses. Adapters must keep both views equal as sets after every call and
//! must never return with only one of them updated.

use async_trait::async_trait;

use crate::domain::{CourseId, Enrollment, EnrollmentSnapshot, Student, StudentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enrollment store adapters.
    pub enum EnrollmentRepositoryError {
        /// The pair is already enrolled.
        Duplicate { student_id: StudentId, course_id: CourseId } =>
            "student {student_id} is already enrolled in {course_id}",
        /// No enrollment exists for the pair.
        NotEnrolled { student_id: StudentId, course_id: CourseId } =>
            "student {student_id} is not enrolled in {course_id}",
        /// The student has no record in the store.
        UnknownStudent { student_id: StudentId } => "student {student_id} does not exist",
        /// The two enrollment views disagree; nothing was changed.
        Inconsistent { message: String } => "enrollment store is inconsistent: {message}",
        /// The store cannot be accessed.
        Unavailable { message: String } => "enrollment store unavailable: {message}",
    }
}

/// Port for reading and mutating enrollment state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Copy both views at one instant.
    async fn snapshot(&self) -> Result<EnrollmentSnapshot, EnrollmentRepositoryError>;

    /// Look up one student record, embedded courses included.
    async fn find_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<Student>, EnrollmentRepositoryError>;

    /// Record an enrollment in both views.
    ///
    /// Fails with [`EnrollmentRepositoryError::Duplicate`] when the pair
    /// already exists.
    async fn insert(&self, enrollment: &Enrollment) -> Result<(), EnrollmentRepositoryError>;

    /// Remove an enrollment from both views and return the student's
    /// remaining enrollments.
    ///
    /// Fails with [`EnrollmentRepositoryError::NotEnrolled`] when the pair is
    /// absent.
    async fn remove(
        &self,
        enrollment: &Enrollment,
    ) -> Result<Vec<Enrollment>, EnrollmentRepositoryError>;

    /// Restore the seeded baseline for both views.
    async fn reset(&self) -> Result<(), EnrollmentRepositoryError>;
}
