//! Tests for the caller identity model.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn own_id() -> StudentId {
    StudentId::new("650610001").expect("valid student id")
}

#[rstest]
#[case("", UserValidationError::EmptyUsername)]
#[case("   ", UserValidationError::EmptyUsername)]
#[case("has space", UserValidationError::UsernameInvalidCharacters)]
#[case("semi;colon", UserValidationError::UsernameInvalidCharacters)]
fn rejects_malformed_usernames(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
fn rejects_overlong_usernames() {
    let raw = "a".repeat(USERNAME_MAX + 1);
    assert_eq!(
        Username::new(raw),
        Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX })
    );
}

#[rstest]
#[case("admin")]
#[case("  student.one-2_x ")]
fn accepts_and_trims_usernames(#[case] raw: &str) {
    let name = Username::new(raw).expect("valid username");
    assert_eq!(name.as_ref(), raw.trim());
}

#[rstest]
fn admin_identity_has_no_student_id() {
    let admin = Identity::admin(Username::new("admin").expect("username"));
    assert_eq!(admin.role(), Role::Admin);
    assert!(admin.student_id().is_none());
}

#[rstest]
fn student_identity_matches_only_itself(own_id: StudentId) {
    let other = StudentId::new("650610002").expect("valid student id");
    let student = Identity::student(Username::new("student1").expect("username"), own_id.clone());

    assert!(student.is_student(&own_id));
    assert!(!student.is_student(&other));
    assert_eq!(student.student_id(), Some(&own_id));
}

#[rstest]
fn admin_is_never_a_student(own_id: StudentId) {
    let admin = Identity::admin(Username::new("admin").expect("username"));
    assert!(!admin.is_student(&own_id));
}

#[rstest]
#[case(Role::Admin, "\"ADMIN\"")]
#[case(Role::Student, "\"STUDENT\"")]
fn roles_serialise_upper_case(#[case] role: Role, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&role).expect("role serialises"), expected);
    assert_eq!(role.to_string(), expected.trim_matches('"'));
}
