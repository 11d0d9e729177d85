//! OpenAPI schema definitions for domain types and response envelopes.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and are registered with utoipa
//! under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credential missing or invalid, or its user no longer exists.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted for this target.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// Student or enrollment does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Duplicate enrollment.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Student`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Student)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentSchema {
    /// Nine-digit student identifier.
    #[schema(example = "650610001")]
    student_id: String,
    /// Six-digit course identifiers from the student record.
    #[schema(example = json!(["261207", "261497"]))]
    courses: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::Enrollment`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Enrollment)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EnrollmentSchema {
    #[schema(example = "650610001")]
    student_id: String,
    #[schema(example = "261207")]
    course_id: String,
}

/// OpenAPI schema for [`crate::domain::StudentEnrollments`].
#[derive(ToSchema)]
#[schema(as = crate::domain::StudentEnrollments)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentEnrollmentsSchema {
    #[schema(example = "650610002")]
    student_id: String,
    /// Course ids derived from the flat enrollment list.
    #[schema(example = json!(["261207"]))]
    courses: Vec<String>,
}

/// Failure part of an envelope.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorBodySchema {
    code: ErrorCodeSchema,
    /// Field and reason codes for validation failures.
    details: Option<serde_json::Value>,
}

macro_rules! envelope_schema {
    ($(#[$meta:meta])* $name:ident, $data:ty) => {
        $(#[$meta])*
        #[derive(ToSchema)]
        #[schema(rename_all = "camelCase")]
        #[expect(
            dead_code,
            reason = "Used only for OpenAPI schema generation via utoipa"
        )]
        pub struct $name {
            success: bool,
            message: String,
            data: Option<$data>,
            error: Option<ErrorBodySchema>,
            trace_id: Option<String>,
        }
    };
}

envelope_schema!(
    /// Envelope around the per-student enrollment list.
    RosterEnvelopeSchema,
    Vec<StudentEnrollmentsSchema>
);
envelope_schema!(
    /// Envelope around one student record.
    StudentEnvelopeSchema,
    StudentSchema
);
envelope_schema!(
    /// Envelope around a created enrollment.
    EnrollmentEnvelopeSchema,
    EnrollmentSchema
);
envelope_schema!(
    /// Envelope around a student's remaining enrollments.
    EnrollmentListEnvelopeSchema,
    Vec<EnrollmentSchema>
);
envelope_schema!(
    /// Envelope around an issued bearer token.
    TokenEnvelopeSchema,
    super::users::TokenResponse
);
envelope_schema!(
    /// Envelope carrying only a message, or an error.
    MessageEnvelopeSchema,
    serde_json::Value
);
