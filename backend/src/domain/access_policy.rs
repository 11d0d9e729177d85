//! Access policy for enrollment operations.
//!
//! [`decide`] is a pure function of the caller and the requested operation.
//! It never consults the store; existence checks happen before it runs.
//!
//! | Operation        | Allowed callers                                         |
//! |------------------|---------------------------------------------------------|
//! | list all, reset  | `ADMIN`                                                 |
//! | get one          | `ADMIN`, or the `STUDENT` whose id is the target        |
//! | add, drop        | the `STUDENT` whose id is the target and the payload id |

use std::fmt;

use super::{Enrollment, Identity, Role, StudentId};

/// An enrollment operation together with the data the policy inspects.
#[derive(Debug, Clone, Copy)]
pub enum Operation<'a> {
    /// Read every student's enrollments.
    ListAll,
    /// Restore the seeded baseline.
    Reset,
    /// Read the record of `target`.
    GetOne { target: &'a StudentId },
    /// Enroll `target` in the course named by `payload`.
    Add {
        target: &'a StudentId,
        payload: &'a Enrollment,
    },
    /// Remove the course named by `payload` from `target`.
    Drop {
        target: &'a StudentId,
        payload: &'a Enrollment,
    },
}

impl Operation<'_> {
    /// Short operation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListAll => "list_all",
            Self::Reset => "reset",
            Self::GetOne { .. } => "get_one",
            Self::Add { .. } => "add",
            Self::Drop { .. } => "drop",
        }
    }
}

/// Why a request was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// Only administrators may perform this operation.
    AdminOnly,
    /// The caller may not read another student's record.
    NotOwnRecord,
    /// Only students may modify enrollments.
    StudentOnly,
    /// The caller may not modify another student's enrollments.
    NotOwnEnrollment,
    /// The body names a different student than the path.
    PayloadMismatch,
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdminOnly => write!(f, "Forbidden access: administrator role required"),
            Self::NotOwnRecord => write!(f, "Forbidden access"),
            Self::StudentOnly => write!(f, "Forbidden access: student role required"),
            Self::NotOwnEnrollment => {
                write!(f, "You are not allowed to modify another student's data")
            }
            Self::PayloadMismatch => {
                write!(f, "Forbidden access: studentId in body does not match path")
            }
        }
    }
}

/// Outcome of a policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The operation may proceed.
    Allow,
    /// The operation is refused for the given reason.
    Deny(DenyReason),
}

impl Decision {
    /// Whether this is [`Decision::Allow`].
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether `identity` may perform `operation`.
///
/// # Examples
/// ```
/// use backend::domain::access_policy::{decide, Decision, DenyReason, Operation};
/// use backend::domain::{Identity, StudentId, Username};
///
/// let me = StudentId::new("650610001").unwrap();
/// let other = StudentId::new("650610002").unwrap();
/// let caller = Identity::student(Username::new("student1").unwrap(), me.clone());
///
/// assert_eq!(decide(&caller, &Operation::GetOne { target: &me }), Decision::Allow);
/// assert_eq!(
///     decide(&caller, &Operation::GetOne { target: &other }),
///     Decision::Deny(DenyReason::NotOwnRecord)
/// );
/// ```
pub fn decide(identity: &Identity, operation: &Operation<'_>) -> Decision {
    match *operation {
        Operation::ListAll | Operation::Reset => match identity.role() {
            Role::Admin => Decision::Allow,
            Role::Student => Decision::Deny(DenyReason::AdminOnly),
        },
        Operation::GetOne { target } => {
            if identity.role() == Role::Admin || identity.is_student(target) {
                Decision::Allow
            } else {
                Decision::Deny(DenyReason::NotOwnRecord)
            }
        }
        Operation::Add { target, payload } | Operation::Drop { target, payload } => {
            modify_own(identity, target, payload)
        }
    }
}

fn modify_own(identity: &Identity, target: &StudentId, payload: &Enrollment) -> Decision {
    if identity.role() != Role::Student {
        return Decision::Deny(DenyReason::StudentOnly);
    }
    if !identity.is_student(target) {
        return Decision::Deny(DenyReason::NotOwnEnrollment);
    }
    if &payload.student_id != target {
        return Decision::Deny(DenyReason::PayloadMismatch);
    }
    Decision::Allow
}
