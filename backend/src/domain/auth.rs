//! Authentication primitives: login credentials and stored password digests.
//!
//! Inbound adapters build [`LoginCredentials`] from raw request fields before
//! talking to the login port, so malformed input never reaches the directory.

use std::fmt;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use super::{UserValidationError, Username};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or malformed.
    InvalidUsername(UserValidationError),
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUsername(inner) => inner.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` satisfies [`Username`] validation.
/// - `password` is non-empty and keeps caller-provided whitespace. It is
///   wiped from memory on drop.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin", "admin-pass").unwrap();
/// assert_eq!(creds.username().as_ref(), "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = Username::new(username).map_err(LoginValidationError::InvalidUsername)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// SHA-256 digest of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest([u8; 32]);

impl PasswordDigest {
    /// Digest a plaintext password.
    pub fn of(password: &str) -> Self {
        Self(Sha256::digest(password.as_bytes()).into())
    }

    /// Parse an already computed hex digest. Either letter case is accepted.
    pub fn from_hex(hex_digest: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0_u8; 32];
        hex::decode_to_slice(hex_digest.trim(), &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Whether `password` hashes to this digest, compared in constant time.
    pub fn matches(&self, password: &str) -> bool {
        self.0.ct_eq(&Self::of(password).0).into()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw")]
    #[case("   ", "pw")]
    #[case("bad name", "pw")]
    fn invalid_usernames_are_rejected(#[case] username: &str, #[case] password: &str) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert!(matches!(err, LoginValidationError::InvalidUsername(_)));
    }

    #[rstest]
    fn empty_password_is_rejected() {
        let err = LoginCredentials::try_from_parts("admin", "").expect_err("empty password");
        assert_eq!(err, LoginValidationError::EmptyPassword);
        assert_eq!(err.to_string(), "password must not be empty");
    }

    #[rstest]
    #[case("  admin  ", " spaced secret ")]
    #[case("student1", "correct horse battery staple")]
    fn valid_credentials_trim_username_only(#[case] username: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(username, password).expect("valid inputs");
        assert_eq!(creds.username().as_ref(), username.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn digest_matches_only_its_password() {
        let digest = PasswordDigest::of("student-pass");
        assert!(digest.matches("student-pass"));
        assert!(!digest.matches("student-pass "));
        assert!(!digest.matches(""));
    }

    #[rstest]
    fn hex_digests_are_case_insensitive() {
        let upper = hex::encode_upper(Sha256::digest(b"admin-pass"));
        let digest = PasswordDigest::from_hex(&upper).expect("valid hex digest");
        assert!(digest.matches("admin-pass"));
        assert_eq!(digest, PasswordDigest::of("admin-pass"));
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("zz")]
    fn malformed_hex_digests_are_rejected(#[case] raw: &str) {
        assert!(PasswordDigest::from_hex(raw).is_err());
    }

    #[rstest]
    fn digests_differing_in_one_byte_do_not_match() {
        let mut bytes: [u8; 32] = Sha256::digest(b"student-pass").into();
        bytes[31] ^= 1;
        let near_miss = PasswordDigest(bytes);
        assert!(!near_miss.matches("student-pass"));
    }

    #[rstest]
    fn debug_output_hides_digest() {
        assert_eq!(format!("{:?}", PasswordDigest::of("x")), "PasswordDigest(..)");
    }
}
