//! Enrollment use-cases.
//!
//! Every operation runs the same pipeline and stops at the first failure:
//! resolve the caller, confirm the target student exists, consult
//! [`access_policy::decide`], then touch the store. Input shape has already
//! been validated by the time a typed request reaches this module.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};

use crate::domain::access_policy::{self, Decision, Operation};
use crate::domain::ports::{
    EnrollmentChangeRequest, EnrollmentRepository, EnrollmentRepositoryError, EnrollmentsCommand,
    EnrollmentsQuery, IdentityRepository,
};
use crate::domain::{
    Enrollment, Error, Identity, IdentityService, Student, StudentEnrollments, StudentId,
    Username,
};

/// Enrollment service implementing the enrollment driving ports.
#[derive(Clone)]
pub struct EnrollmentService<R, I> {
    enrollments: Arc<R>,
    identities: IdentityService<I>,
}

impl<R, I> EnrollmentService<R, I> {
    /// Create a service over the given store and user directory.
    pub fn new(enrollments: Arc<R>, directory: Arc<I>) -> Self {
        Self {
            enrollments,
            identities: IdentityService::new(directory),
        }
    }
}

impl<R, I> EnrollmentService<R, I>
where
    R: EnrollmentRepository,
    I: IdentityRepository,
{
    fn map_repository_error(err: EnrollmentRepositoryError) -> Error {
        match err {
            EnrollmentRepositoryError::Duplicate {
                student_id,
                course_id,
            } => Error::conflict("Student is already enrolled in this course").with_details(
                json!({
                    "studentId": student_id,
                    "courseId": course_id,
                    "code": "duplicate_enrollment",
                }),
            ),
            EnrollmentRepositoryError::NotEnrolled {
                student_id,
                course_id,
            } => Error::not_found("Enrollment does not exist").with_details(json!({
                "studentId": student_id,
                "courseId": course_id,
                "code": "enrollment_not_found",
            })),
            EnrollmentRepositoryError::UnknownStudent { .. } => {
                Error::not_found("Student does not exist")
            }
            EnrollmentRepositoryError::Inconsistent { message } => {
                error!(%message, "enrollment views disagree; request rejected");
                Error::internal(format!("enrollment store is inconsistent: {message}"))
            }
            EnrollmentRepositoryError::Unavailable { message } => {
                error!(%message, "enrollment store unavailable");
                Error::internal(format!("enrollment store unavailable: {message}"))
            }
        }
    }

    fn authorize(identity: &Identity, operation: &Operation<'_>) -> Result<(), Error> {
        match access_policy::decide(identity, operation) {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => {
                warn!(
                    username = %identity.username(),
                    role = %identity.role(),
                    operation = operation.name(),
                    %reason,
                    "enrollment access denied"
                );
                Err(Error::forbidden(reason.to_string()))
            }
        }
    }

    async fn require_student(&self, student_id: &StudentId) -> Result<Student, Error> {
        self.enrollments
            .find_student(student_id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found("Student does not exist"))
    }

    /// Resolve the caller and target, then apply the policy to `operation`.
    async fn admit(
        &self,
        caller: &Username,
        target: &StudentId,
        operation: &Operation<'_>,
    ) -> Result<Identity, Error> {
        let identity = self.identities.resolve(caller).await?;
        self.require_student(target).await?;
        Self::authorize(&identity, operation)?;
        Ok(identity)
    }
}

#[async_trait]
impl<R, I> EnrollmentsQuery for EnrollmentService<R, I>
where
    R: EnrollmentRepository,
    I: IdentityRepository,
{
    async fn list_enrollments(&self, caller: &Username) -> Result<Vec<StudentEnrollments>, Error> {
        let identity = self.identities.resolve(caller).await?;
        Self::authorize(&identity, &Operation::ListAll)?;
        let snapshot = self
            .enrollments
            .snapshot()
            .await
            .map_err(Self::map_repository_error)?;
        Ok(snapshot.roster())
    }

    async fn get_student(
        &self,
        caller: &Username,
        student_id: &StudentId,
    ) -> Result<Student, Error> {
        let identity = self.identities.resolve(caller).await?;
        let student = self.require_student(student_id).await?;
        Self::authorize(&identity, &Operation::GetOne { target: student_id })?;
        Ok(student)
    }
}

#[async_trait]
impl<R, I> EnrollmentsCommand for EnrollmentService<R, I>
where
    R: EnrollmentRepository,
    I: IdentityRepository,
{
    async fn reset(&self, caller: &Username) -> Result<(), Error> {
        let identity = self.identities.resolve(caller).await?;
        Self::authorize(&identity, &Operation::Reset)?;
        self.enrollments
            .reset()
            .await
            .map_err(Self::map_repository_error)?;
        info!(username = %identity.username(), "enrollments reset to baseline");
        Ok(())
    }

    async fn add_enrollment(&self, request: EnrollmentChangeRequest) -> Result<Enrollment, Error> {
        let operation = Operation::Add {
            target: &request.target,
            payload: &request.enrollment,
        };
        let identity = self
            .admit(&request.caller, &request.target, &operation)
            .await?;
        self.enrollments
            .insert(&request.enrollment)
            .await
            .map_err(Self::map_repository_error)?;
        info!(
            username = %identity.username(),
            student_id = %request.enrollment.student_id,
            course_id = %request.enrollment.course_id,
            "enrollment added"
        );
        Ok(request.enrollment)
    }

    async fn drop_enrollment(
        &self,
        request: EnrollmentChangeRequest,
    ) -> Result<Vec<Enrollment>, Error> {
        let operation = Operation::Drop {
            target: &request.target,
            payload: &request.enrollment,
        };
        let identity = self
            .admit(&request.caller, &request.target, &operation)
            .await?;
        let remaining = self
            .enrollments
            .remove(&request.enrollment)
            .await
            .map_err(Self::map_repository_error)?;
        info!(
            username = %identity.username(),
            student_id = %request.enrollment.student_id,
            course_id = %request.enrollment.course_id,
            remaining = remaining.len(),
            "enrollment dropped"
        );
        Ok(remaining)
    }
}

#[cfg(test)]
#[path = "enrollment_service_tests.rs"]
mod tests;
