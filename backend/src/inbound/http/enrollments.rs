//! Enrollment API handlers.
//!
//! ```text
//! GET    /api/v1/enrollments
//! POST   /api/v1/enrollments/reset
//! GET    /api/v1/enrollments/{studentId}
//! POST   /api/v1/enrollments/{studentId} {"studentId":"650610001","courseId":"261207"}
//! DELETE /api/v1/enrollments/{studentId} {"studentId":"650610001","courseId":"261207"}
//! ```
//!
//! The bearer credential is the first extractor on every handler, so a
//! request without a valid token gets `401` before its path or body is read.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::auth::AuthenticatedUser;
use super::envelope;
use super::schemas::{
    EnrollmentEnvelopeSchema, EnrollmentListEnvelopeSchema, MessageEnvelopeSchema,
    RosterEnvelopeSchema, StudentEnvelopeSchema,
};
use super::state::HttpState;
use super::validation::{parse_enrollment, parse_student_id};
use crate::domain::Error;
use crate::domain::ports::EnrollmentChangeRequest;
use crate::inbound::http::ApiResult;

/// Body for add and drop requests.
///
/// Both fields are optional here so a missing field is reported with its
/// name rather than as a generic deserialisation failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentBody {
    #[schema(example = "650610001")]
    pub student_id: Option<String>,
    #[schema(example = "261207")]
    pub course_id: Option<String>,
}

fn change_request(
    auth: AuthenticatedUser,
    path: &str,
    body: EnrollmentBody,
) -> Result<EnrollmentChangeRequest, Error> {
    let target = parse_student_id(path)?;
    let enrollment = parse_enrollment(body.student_id, body.course_id)?;
    Ok(EnrollmentChangeRequest {
        caller: auth.username().clone(),
        target,
        enrollment,
    })
}

/// List every student's enrollments. Administrators only.
#[utoipa::path(
    get,
    path = "/api/v1/enrollments",
    responses(
        (status = 200, description = "Enrollments per student", body = RosterEnvelopeSchema),
        (status = 401, description = "Missing or invalid credential", body = MessageEnvelopeSchema),
        (status = 403, description = "Caller is not an administrator", body = MessageEnvelopeSchema),
        (status = 500, description = "Internal server error", body = MessageEnvelopeSchema)
    ),
    tags = ["enrollments"],
    operation_id = "listEnrollments",
    security(("bearerAuth" = []))
)]
#[get("/enrollments")]
pub async fn list_enrollments(
    auth: AuthenticatedUser,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let roster = state.enrollments.list_enrollments(auth.username()).await?;
    Ok(envelope::ok("Enrollments retrieved", roster))
}

/// Restore the seeded baseline. Administrators only.
#[utoipa::path(
    post,
    path = "/api/v1/enrollments/reset",
    responses(
        (status = 200, description = "Store reset", body = MessageEnvelopeSchema),
        (status = 401, description = "Missing or invalid credential", body = MessageEnvelopeSchema),
        (status = 403, description = "Caller is not an administrator", body = MessageEnvelopeSchema),
        (status = 500, description = "Internal server error", body = MessageEnvelopeSchema)
    ),
    tags = ["enrollments"],
    operation_id = "resetEnrollments",
    security(("bearerAuth" = []))
)]
#[post("/enrollments/reset")]
pub async fn reset_enrollments(
    auth: AuthenticatedUser,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    state.enrollment_changes.reset(auth.username()).await?;
    Ok(HttpResponse::Ok().json(envelope::Envelope::acknowledged(
        "Enrollments reset to baseline",
    )))
}

/// Fetch one student record. Administrators, or the student themself.
#[utoipa::path(
    get,
    path = "/api/v1/enrollments/{studentId}",
    params(("studentId" = String, Path, description = "Nine-digit student id")),
    responses(
        (status = 200, description = "Student record", body = StudentEnvelopeSchema),
        (status = 400, description = "Malformed student id", body = MessageEnvelopeSchema),
        (status = 401, description = "Missing or invalid credential", body = MessageEnvelopeSchema),
        (status = 403, description = "Caller may not read this record", body = MessageEnvelopeSchema),
        (status = 404, description = "Student does not exist", body = MessageEnvelopeSchema),
        (status = 500, description = "Internal server error", body = MessageEnvelopeSchema)
    ),
    tags = ["enrollments"],
    operation_id = "getStudent",
    security(("bearerAuth" = []))
)]
#[get("/enrollments/{student_id}")]
pub async fn get_student(
    auth: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let target = parse_student_id(&path.into_inner())?;
    let student = state
        .enrollments
        .get_student(auth.username(), &target)
        .await?;
    Ok(envelope::ok("Student retrieved", student))
}

/// Enroll the calling student in a course.
#[utoipa::path(
    post,
    path = "/api/v1/enrollments/{studentId}",
    params(("studentId" = String, Path, description = "Nine-digit student id")),
    request_body = EnrollmentBody,
    responses(
        (status = 200, description = "Enrollment created", body = EnrollmentEnvelopeSchema),
        (status = 400, description = "Invalid request", body = MessageEnvelopeSchema),
        (status = 401, description = "Missing or invalid credential", body = MessageEnvelopeSchema),
        (status = 403, description = "Caller may not modify this record", body = MessageEnvelopeSchema),
        (status = 404, description = "Student does not exist", body = MessageEnvelopeSchema),
        (status = 409, description = "Already enrolled", body = MessageEnvelopeSchema),
        (status = 500, description = "Internal server error", body = MessageEnvelopeSchema)
    ),
    tags = ["enrollments"],
    operation_id = "addEnrollment",
    security(("bearerAuth" = []))
)]
#[post("/enrollments/{student_id}")]
pub async fn add_enrollment(
    auth: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EnrollmentBody>,
) -> ApiResult<HttpResponse> {
    let request = change_request(auth, &path.into_inner(), payload.into_inner())?;
    let created = state.enrollment_changes.add_enrollment(request).await?;
    Ok(envelope::ok("Enrollment added", created))
}

/// Drop a course for the calling student.
#[utoipa::path(
    delete,
    path = "/api/v1/enrollments/{studentId}",
    params(("studentId" = String, Path, description = "Nine-digit student id")),
    request_body = EnrollmentBody,
    responses(
        (status = 200, description = "Remaining enrollments", body = EnrollmentListEnvelopeSchema),
        (status = 400, description = "Invalid request", body = MessageEnvelopeSchema),
        (status = 401, description = "Missing or invalid credential", body = MessageEnvelopeSchema),
        (status = 403, description = "Caller may not modify this record", body = MessageEnvelopeSchema),
        (status = 404, description = "Student or enrollment does not exist", body = MessageEnvelopeSchema),
        (status = 500, description = "Internal server error", body = MessageEnvelopeSchema)
    ),
    tags = ["enrollments"],
    operation_id = "dropEnrollment",
    security(("bearerAuth" = []))
)]
#[delete("/enrollments/{student_id}")]
pub async fn drop_enrollment(
    auth: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EnrollmentBody>,
) -> ApiResult<HttpResponse> {
    let request = change_request(auth, &path.into_inner(), payload.into_inner())?;
    let remaining = state.enrollment_changes.drop_enrollment(request).await?;
    Ok(envelope::ok("Enrollment dropped", remaining))
}

#[cfg(test)]
#[path = "enrollments_tests.rs"]
mod tests;
