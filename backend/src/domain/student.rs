//! Student and course identifiers plus the student aggregate.
//!
//! Identifiers are validated once, at construction, so the rest of the
//! domain can treat a [`StudentId`] or [`CourseId`] as well formed.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of digits in a student identifier.
pub const STUDENT_ID_LEN: usize = 9;
/// Number of digits in a course identifier.
pub const COURSE_ID_LEN: usize = 6;

/// Validation errors raised by identifier and payload constructors.
///
/// Each variant names exactly one violated constraint; constructors report
/// the first one they hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentValidationError {
    /// Student id was blank.
    EmptyStudentId,
    /// Student id was not exactly nine ASCII digits.
    InvalidStudentId,
    /// Course id was blank.
    EmptyCourseId,
    /// Course id was not exactly six ASCII digits.
    InvalidCourseId,
}

impl EnrollmentValidationError {
    /// Request field the error refers to, in wire casing.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyStudentId | Self::InvalidStudentId => "studentId",
            Self::EmptyCourseId | Self::InvalidCourseId => "courseId",
        }
    }

    /// Stable machine-readable reason.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyStudentId => "empty_student_id",
            Self::InvalidStudentId => "invalid_student_id",
            Self::EmptyCourseId => "empty_course_id",
            Self::InvalidCourseId => "invalid_course_id",
        }
    }
}

impl fmt::Display for EnrollmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStudentId => write!(f, "studentId must not be empty"),
            Self::InvalidStudentId => {
                write!(f, "studentId must be exactly {STUDENT_ID_LEN} digits")
            }
            Self::EmptyCourseId => write!(f, "courseId must not be empty"),
            Self::InvalidCourseId => write!(f, "courseId must be exactly {COURSE_ID_LEN} digits"),
        }
    }
}

impl std::error::Error for EnrollmentValidationError {}

static STUDENT_ID_RE: OnceLock<Regex> = OnceLock::new();
static COURSE_ID_RE: OnceLock<Regex> = OnceLock::new();

fn digits_regex(cell: &'static OnceLock<Regex>, len: usize) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(&format!("^[0-9]{{{len}}}$"))
            .unwrap_or_else(|error| panic!("identifier regex failed to compile: {error}"))
    })
}

/// Stable student identifier: exactly nine ASCII digits.
///
/// # Examples
/// ```
/// use backend::domain::StudentId;
///
/// assert!(StudentId::new("650610001").is_ok());
/// assert!(StudentId::new("65061").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// Validate and construct a [`StudentId`].
    pub fn new(id: impl Into<String>) -> Result<Self, EnrollmentValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EnrollmentValidationError::EmptyStudentId);
        }
        if !digits_regex(&STUDENT_ID_RE, STUDENT_ID_LEN).is_match(&id) {
            return Err(EnrollmentValidationError::InvalidStudentId);
        }
        Ok(Self(id))
    }
}

/// Course identifier: exactly six ASCII digits.
///
/// No catalogue lookup happens; any syntactically valid id is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseId(String);

impl CourseId {
    /// Validate and construct a [`CourseId`].
    pub fn new(id: impl Into<String>) -> Result<Self, EnrollmentValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EnrollmentValidationError::EmptyCourseId);
        }
        if !digits_regex(&COURSE_ID_RE, COURSE_ID_LEN).is_match(&id) {
            return Err(EnrollmentValidationError::InvalidCourseId);
        }
        Ok(Self(id))
    }
}

macro_rules! string_newtype_conversions {
    ($ty:ident) => {
        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = EnrollmentValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

string_newtype_conversions!(StudentId);
string_newtype_conversions!(CourseId);

/// Student record with its embedded list of enrolled courses.
///
/// `courses` mirrors the flat enrollment list held by the store; the store
/// keeps the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: StudentId,
    pub courses: Vec<CourseId>,
}

impl Student {
    /// Build a student with the given courses.
    pub fn new(student_id: StudentId, courses: Vec<CourseId>) -> Self {
        Self {
            student_id,
            courses,
        }
    }

    /// Whether the embedded course list mentions `course_id`.
    pub fn takes(&self, course_id: &CourseId) -> bool {
        self.courses.contains(course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", EnrollmentValidationError::EmptyStudentId)]
    #[case("   ", EnrollmentValidationError::EmptyStudentId)]
    #[case("65061000", EnrollmentValidationError::InvalidStudentId)]
    #[case("6506100012", EnrollmentValidationError::InvalidStudentId)]
    #[case("65061000x", EnrollmentValidationError::InvalidStudentId)]
    #[case(" 650610001", EnrollmentValidationError::InvalidStudentId)]
    fn rejects_malformed_student_ids(
        #[case] raw: &str,
        #[case] expected: EnrollmentValidationError,
    ) {
        assert_eq!(StudentId::new(raw), Err(expected));
    }

    #[rstest]
    #[case("", EnrollmentValidationError::EmptyCourseId)]
    #[case("26120", EnrollmentValidationError::InvalidCourseId)]
    #[case("CS1010", EnrollmentValidationError::InvalidCourseId)]
    fn rejects_malformed_course_ids(#[case] raw: &str, #[case] expected: EnrollmentValidationError) {
        assert_eq!(CourseId::new(raw), Err(expected));
    }

    #[rstest]
    fn errors_name_their_field() {
        assert_eq!(EnrollmentValidationError::InvalidStudentId.field(), "studentId");
        assert_eq!(EnrollmentValidationError::EmptyCourseId.field(), "courseId");
        assert_eq!(
            EnrollmentValidationError::InvalidCourseId.to_string(),
            "courseId must be exactly 6 digits"
        );
    }

    #[rstest]
    fn student_serialises_camel_case() {
        let student = Student::new(
            StudentId::new("650610001").expect("student id"),
            vec![CourseId::new("261207").expect("course id")],
        );
        let value = serde_json::to_value(&student).expect("student serialises");
        assert_eq!(
            value,
            serde_json::json!({ "studentId": "650610001", "courses": ["261207"] })
        );
    }

    #[rstest]
    fn deserialising_rejects_invalid_ids() {
        let result: Result<Student, _> =
            serde_json::from_value(serde_json::json!({ "studentId": "x", "courses": [] }));
        assert!(result.is_err());
    }
}
