//! Request validation for inbound HTTP adapters.
//!
//! Raw path segments and optional-field bodies are turned into typed domain
//! values here, once, before any service call. Each failure names the field
//! and a stable code in `details`.

use serde_json::json;

use crate::domain::{CourseId, Enrollment, EnrollmentValidationError, Error, StudentId};

/// Validation error codes owned by this adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const STUDENT_ID: FieldName = FieldName::new("studentId");
pub(crate) const COURSE_ID: FieldName = FieldName::new("courseId");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Map an identifier rule violation, echoing the rejected value.
pub(crate) fn identifier_error(err: &EnrollmentValidationError, value: &str) -> Error {
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "value": value,
        "code": err.code(),
    }))
}

/// Validate a student id taken from the request path.
pub(crate) fn parse_student_id(raw: &str) -> Result<StudentId, Error> {
    StudentId::new(raw).map_err(|err| identifier_error(&err, raw))
}

/// Validate an enrollment body, reporting the first violated constraint.
///
/// Fields are checked in order: `studentId` presence and shape, then
/// `courseId` presence and shape.
pub(crate) fn parse_enrollment(
    student_id: Option<String>,
    course_id: Option<String>,
) -> Result<Enrollment, Error> {
    let raw_student = student_id.ok_or_else(|| missing_field_error(STUDENT_ID))?;
    let student_id = parse_student_id(&raw_student)?;
    let raw_course = course_id.ok_or_else(|| missing_field_error(COURSE_ID))?;
    let course_id = CourseId::new(raw_course.as_str())
        .map_err(|err| identifier_error(&err, &raw_course))?;
    Ok(Enrollment::new(student_id, course_id))
}
