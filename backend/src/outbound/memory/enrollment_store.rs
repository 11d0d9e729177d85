//! Mutex-guarded enrollment store.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{EnrollmentRepository, EnrollmentRepositoryError};
use crate::domain::seed::{SeedError, seed_enrollments};
use crate::domain::{Enrollment, EnrollmentSnapshot, Student, StudentId};

/// Enrollment store keeping both views behind one lock.
///
/// ## Invariants
/// - After every call each student's embedded courses equal, as a set, the
///   course ids of that student's flat enrollments.
/// - A call that fails leaves both views untouched.
#[derive(Debug)]
pub struct InMemoryEnrollmentStore {
    baseline: EnrollmentSnapshot,
    state: Mutex<EnrollmentSnapshot>,
}

impl InMemoryEnrollmentStore {
    /// Create a store whose reset target is `baseline`.
    pub fn new(baseline: EnrollmentSnapshot) -> Self {
        Self {
            state: Mutex::new(baseline.clone()),
            baseline,
        }
    }

    /// Create a store holding the seeded students and enrollments.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(seed_enrollments()?))
    }

    fn lock(&self) -> Result<MutexGuard<'_, EnrollmentSnapshot>, EnrollmentRepositoryError> {
        self.state
            .lock()
            .map_err(|_| EnrollmentRepositoryError::unavailable("enrollment store lock poisoned"))
    }
}

fn student_mut<'a>(
    students: &'a mut [Student],
    student_id: &StudentId,
) -> Result<&'a mut Student, EnrollmentRepositoryError> {
    students
        .iter_mut()
        .find(|student| &student.student_id == student_id)
        .ok_or_else(|| EnrollmentRepositoryError::unknown_student(student_id.clone()))
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentStore {
    async fn snapshot(&self) -> Result<EnrollmentSnapshot, EnrollmentRepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn find_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<Student>, EnrollmentRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .students
            .iter()
            .find(|student| &student.student_id == student_id)
            .cloned())
    }

    async fn insert(&self, enrollment: &Enrollment) -> Result<(), EnrollmentRepositoryError> {
        let mut guard = self.lock()?;
        let state = &mut *guard;
        let listed = state.enrollments.contains(enrollment);
        let student = student_mut(&mut state.students, &enrollment.student_id)?;
        match (listed, student.takes(&enrollment.course_id)) {
            (true, true) => Err(EnrollmentRepositoryError::duplicate(
                enrollment.student_id.clone(),
                enrollment.course_id.clone(),
            )),
            (false, false) => {
                student.courses.push(enrollment.course_id.clone());
                state.enrollments.push(enrollment.clone());
                Ok(())
            }
            (listed, embedded) => Err(EnrollmentRepositoryError::inconsistent(format!(
                "{}/{}: flat list {listed}, embedded list {embedded}",
                enrollment.student_id, enrollment.course_id
            ))),
        }
    }

    async fn remove(
        &self,
        enrollment: &Enrollment,
    ) -> Result<Vec<Enrollment>, EnrollmentRepositoryError> {
        let mut guard = self.lock()?;
        let state = &mut *guard;
        let position = state.enrollments.iter().position(|e| e == enrollment);
        let student = student_mut(&mut state.students, &enrollment.student_id)?;
        match (position, student.takes(&enrollment.course_id)) {
            (Some(index), true) => {
                student
                    .courses
                    .retain(|course_id| course_id != &enrollment.course_id);
                state.enrollments.remove(index);
                Ok(state
                    .enrollments
                    .iter()
                    .filter(|e| e.student_id == enrollment.student_id)
                    .cloned()
                    .collect())
            }
            (None, false) => Err(EnrollmentRepositoryError::not_enrolled(
                enrollment.student_id.clone(),
                enrollment.course_id.clone(),
            )),
            (position, embedded) => Err(EnrollmentRepositoryError::inconsistent(format!(
                "{}/{}: flat list {}, embedded list {embedded}",
                enrollment.student_id,
                enrollment.course_id,
                position.is_some()
            ))),
        }
    }

    async fn reset(&self) -> Result<(), EnrollmentRepositoryError> {
        let mut state = self.lock()?;
        *state = self.baseline.clone();
        Ok(())
    }
}
