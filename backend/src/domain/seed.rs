//! Seeded baseline for the enrollment store and the user directory.
//!
//! Reset restores exactly this state. The tables are plain strings and are
//! validated through the normal constructors, so a typo fails startup
//! instead of producing an unreachable record.

use thiserror::Error;

use super::ports::UserAccount;
use super::{
    CourseId, Enrollment, EnrollmentSnapshot, EnrollmentValidationError, Identity,
    PasswordDigest, Student, StudentId, UserValidationError, Username,
};

/// Password for the seeded administrator.
pub const ADMIN_PASSWORD: &str = "admin-pass";
/// Password shared by the seeded students.
pub const STUDENT_PASSWORD: &str = "student-pass";

const STUDENTS: &[(&str, &[&str])] = &[
    ("650610001", &["261207", "261497"]),
    ("650610002", &["261207"]),
    ("650610003", &[]),
];

/// `(username, acts as student, password)`; `None` marks an administrator.
const USERS: &[(&str, Option<&str>, &str)] = &[
    ("admin", None, ADMIN_PASSWORD),
    ("student1", Some("650610001"), STUDENT_PASSWORD),
    ("student2", Some("650610002"), STUDENT_PASSWORD),
    ("student3", Some("650610003"), STUDENT_PASSWORD),
];

/// A seed table entry failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    #[error("invalid seeded identifier: {0}")]
    Identifier(#[from] EnrollmentValidationError),
    #[error("invalid seeded username: {0}")]
    Username(#[from] UserValidationError),
}

/// Seeded students and the matching flat enrollment list.
///
/// # Examples
/// ```
/// use backend::domain::seed::seed_enrollments;
///
/// let snapshot = seed_enrollments().unwrap();
/// assert_eq!(snapshot.students.len(), 3);
/// assert!(snapshot.is_consistent());
/// ```
pub fn seed_enrollments() -> Result<EnrollmentSnapshot, SeedError> {
    let mut snapshot = EnrollmentSnapshot::default();
    for (raw_student, raw_courses) in STUDENTS {
        let student_id = StudentId::new(*raw_student)?;
        let courses = raw_courses
            .iter()
            .map(|raw| CourseId::new(*raw))
            .collect::<Result<Vec<_>, _>>()?;
        snapshot.enrollments.extend(
            courses
                .iter()
                .map(|course_id| Enrollment::new(student_id.clone(), course_id.clone())),
        );
        snapshot.students.push(Student::new(student_id, courses));
    }
    Ok(snapshot)
}

/// Seeded directory accounts with digested passwords.
pub fn seed_accounts() -> Result<Vec<UserAccount>, SeedError> {
    USERS
        .iter()
        .map(|(raw_username, raw_student, password)| -> Result<UserAccount, SeedError> {
            let username = Username::new(*raw_username)?;
            let identity = match raw_student {
                Some(raw) => Identity::student(username, StudentId::new(*raw)?),
                None => Identity::admin(username),
            };
            Ok(UserAccount {
                identity,
                password_digest: PasswordDigest::of(password),
            })
        })
        .collect()
}
