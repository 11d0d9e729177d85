//! Caller identities: usernames, roles, and the student a user acts as.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::StudentId;

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    UsernameTooLong { max: usize },
    UsernameInvalidCharacters,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::UsernameInvalidCharacters => write!(
                f,
                "username may only contain letters, numbers, dots, dashes, or underscores",
            ),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 32;

static USERNAME_RE: OnceLock<Regex> = OnceLock::new();

fn username_regex() -> &'static Regex {
    USERNAME_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        Regex::new("^[A-Za-z0-9_.-]+$")
            .unwrap_or_else(|error| panic!("username regex failed to compile: {error}"))
    })
}

/// Unique login name. Trimmed on construction.
///
/// # Examples
/// ```
/// use backend::domain::Username;
///
/// let name = Username::new("  student1 ").unwrap();
/// assert_eq!(name.as_ref(), "student1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if trimmed.chars().count() > USERNAME_MAX {
            return Err(UserValidationError::UsernameTooLong { max: USERNAME_MAX });
        }
        if !username_regex().is_match(trimmed) {
            return Err(UserValidationError::UsernameInvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("ADMIN"),
            Self::Student => f.write_str("STUDENT"),
        }
    }
}

/// Resolved caller identity.
///
/// ## Invariants
/// - `student_id` is present iff `role` is [`Role::Student`]. The
///   constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: Username,
    role: Role,
    student_id: Option<StudentId>,
}

impl Identity {
    /// An administrator identity.
    pub fn admin(username: Username) -> Self {
        Self {
            username,
            role: Role::Admin,
            student_id: None,
        }
    }

    /// A student identity acting as `student_id`.
    pub fn student(username: Username, student_id: StudentId) -> Self {
        Self {
            username,
            role: Role::Student,
            student_id: Some(student_id),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The student this identity acts as; `None` for administrators.
    pub fn student_id(&self) -> Option<&StudentId> {
        self.student_id.as_ref()
    }

    /// Whether this is a student acting as exactly `student_id`.
    pub fn is_student(&self, student_id: &StudentId) -> bool {
        self.role == Role::Student && self.student_id.as_ref() == Some(student_id)
    }
}

#[cfg(test)]
mod tests;
