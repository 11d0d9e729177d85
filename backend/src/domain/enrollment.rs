//! Enrollment records and store snapshots.
//!
//! An [`Enrollment`] is the flat projection of "student takes course". The
//! store also embeds the same information in each [`Student`]; an
//! [`EnrollmentSnapshot`] captures both views at one instant so callers can
//! derive responses or check that they agree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{CourseId, EnrollmentValidationError, Student, StudentId};

/// A student/course pairing. Unique per pair within the store.
///
/// # Examples
/// ```
/// use backend::domain::Enrollment;
///
/// let enrollment = Enrollment::try_from_parts("650610001", "261207").unwrap();
/// assert_eq!(enrollment.student_id.as_ref(), "650610001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

impl Enrollment {
    /// Build an enrollment from validated identifiers.
    pub fn new(student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            student_id,
            course_id,
        }
    }

    /// Validate raw payload fields, student id first.
    pub fn try_from_parts(
        student_id: &str,
        course_id: &str,
    ) -> Result<Self, EnrollmentValidationError> {
        let student_id = StudentId::new(student_id)?;
        let course_id = CourseId::new(course_id)?;
        Ok(Self::new(student_id, course_id))
    }
}

/// One row of the "list all enrollments" view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentEnrollments {
    pub student_id: StudentId,
    pub courses: Vec<CourseId>,
}

/// Point-in-time copy of both enrollment representations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrollmentSnapshot {
    pub students: Vec<Student>,
    pub enrollments: Vec<Enrollment>,
}

impl EnrollmentSnapshot {
    /// Per-student course lists derived from the flat enrollment list.
    ///
    /// Students appear in store order and their courses in enrollment
    /// order. The embedded `Student::courses` field is deliberately ignored.
    pub fn roster(&self) -> Vec<StudentEnrollments> {
        self.students
            .iter()
            .map(|student| StudentEnrollments {
                student_id: student.student_id.clone(),
                courses: self.courses_of(&student.student_id),
            })
            .collect()
    }

    /// Course ids from the flat list for one student.
    pub fn courses_of(&self, student_id: &StudentId) -> Vec<CourseId> {
        self.enrollments
            .iter()
            .filter(|enrollment| &enrollment.student_id == student_id)
            .map(|enrollment| enrollment.course_id.clone())
            .collect()
    }

    /// Whether every student's embedded courses match the flat list as sets.
    pub fn is_consistent(&self) -> bool {
        self.students.iter().all(|student| {
            let embedded: BTreeSet<&CourseId> = student.courses.iter().collect();
            let flat: BTreeSet<&CourseId> = self
                .enrollments
                .iter()
                .filter(|enrollment| enrollment.student_id == student.student_id)
                .map(|enrollment| &enrollment.course_id)
                .collect();
            embedded == flat
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn student_id(raw: &str) -> StudentId {
        StudentId::new(raw).expect("valid student id")
    }

    fn course_id(raw: &str) -> CourseId {
        CourseId::new(raw).expect("valid course id")
    }

    #[fixture]
    fn snapshot() -> EnrollmentSnapshot {
        EnrollmentSnapshot {
            students: vec![
                Student::new(
                    student_id("650610001"),
                    vec![course_id("261207"), course_id("261497")],
                ),
                Student::new(student_id("650610002"), vec![]),
            ],
            enrollments: vec![
                Enrollment::new(student_id("650610001"), course_id("261207")),
                Enrollment::new(student_id("650610001"), course_id("261497")),
            ],
        }
    }

    #[rstest]
    fn roster_lists_every_student(snapshot: EnrollmentSnapshot) {
        let roster = snapshot.roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(
            roster.first().map(|row| row.courses.clone()),
            Some(vec![course_id("261207"), course_id("261497")])
        );
        assert_eq!(roster.get(1).map(|row| row.courses.len()), Some(0));
    }

    #[rstest]
    fn roster_is_derived_from_flat_list(mut snapshot: EnrollmentSnapshot) {
        if let Some(student) = snapshot.students.get_mut(1) {
            student.courses.push(course_id("999999"));
        }
        let roster = snapshot.roster();
        assert_eq!(roster.get(1).map(|row| row.courses.len()), Some(0));
    }

    #[rstest]
    fn consistency_detects_drift(mut snapshot: EnrollmentSnapshot) {
        assert!(snapshot.is_consistent());
        snapshot.enrollments.pop();
        assert!(!snapshot.is_consistent());
    }

    #[rstest]
    fn consistency_ignores_course_order(mut snapshot: EnrollmentSnapshot) {
        snapshot.enrollments.reverse();
        assert!(snapshot.is_consistent());
    }

    #[rstest]
    #[case("", "261207", EnrollmentValidationError::EmptyStudentId)]
    #[case("650610001", "2612", EnrollmentValidationError::InvalidCourseId)]
    #[case("bad", "bad", EnrollmentValidationError::InvalidStudentId)]
    fn payload_reports_first_violation(
        #[case] student: &str,
        #[case] course: &str,
        #[case] expected: EnrollmentValidationError,
    ) {
        assert_eq!(Enrollment::try_from_parts(student, course), Err(expected));
    }
}
