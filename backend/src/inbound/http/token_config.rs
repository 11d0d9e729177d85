//! Bearer token configuration parsing and validation.
//!
//! Centralises the environment-driven token settings so they are validated
//! consistently and can be tested with a mocked environment.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use mockable::Env;
use rand::RngCore;
use tracing::warn;
use zeroize::Zeroizing;

const TOKEN_SECRET_DEFAULT_PATH: &str = "/var/run/secrets/token_secret";
/// Minimum HMAC secret length; shorter secrets are never used for signing.
pub const TOKEN_SECRET_MIN_LEN: usize = 32;
/// Token lifetime used when `TOKEN_TTL_SECONDS` is unset.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);
const MAX_TOKEN_TTL_SECONDS: u64 = 24 * 60 * 60;
const SECRET_FILE_ENV: &str = "TOKEN_SECRET_FILE";
const ALLOW_EPHEMERAL_ENV: &str = "TOKEN_ALLOW_EPHEMERAL";
const TTL_ENV: &str = "TOKEN_TTL_SECONDS";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const TTL_EXPECTED: &str = "whole seconds between 1 and 86400";

/// Build mode for token configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate defaults and emit warnings.
    Debug,
    /// Release builds require explicit, valid settings.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backend::inbound::http::token_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Token settings derived from configuration.
///
/// `Debug` output omits the secret.
pub struct TokenSettings {
    /// HMAC secret used to sign and verify bearer tokens.
    pub secret: Zeroizing<Vec<u8>>,
    /// Lifetime of issued tokens.
    pub ttl: Duration,
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &format_args!("<{} bytes>", self.secret.len()))
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Errors raised while validating token configuration.
#[derive(thiserror::Error, Debug)]
pub enum TokenConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the secret file failed.
    #[error("failed to read token secret at {path}: {source}")]
    SecretRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The secret file is too short and no temporary secret may replace it.
    #[error("token secret at {path} too short: need >= {min_len} bytes, got {length}")]
    SecretTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// Release builds must not sign with a random per-process secret.
    #[error("TOKEN_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build token settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use backend::inbound::http::token_config::{BuildMode, token_settings_from_env};
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let secret_path = std::env::temp_dir().join("token_secret_example");
/// std::fs::write(&secret_path, vec![b'k'; 32])?;
///
/// let secret_path = secret_path.to_str().expect("valid path").to_string();
/// let mut env = MockEnv::new();
/// env.expect_string().returning(move |name| match name {
///     "TOKEN_SECRET_FILE" => Some(secret_path.clone()),
///     "TOKEN_ALLOW_EPHEMERAL" => Some("0".to_string()),
///     "TOKEN_TTL_SECONDS" => Some("600".to_string()),
///     _ => None,
/// });
///
/// let settings = token_settings_from_env(&env, BuildMode::Release)?;
/// assert_eq!(settings.ttl.as_secs(), 600);
/// # Ok(())
/// # }
/// ```
pub fn token_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<TokenSettings, TokenConfigError> {
    let allow_ephemeral = allow_ephemeral_from_env(env, mode)?;
    let ttl = ttl_from_env(env, mode)?;
    let secret = secret_from_env(env, mode, allow_ephemeral)?;
    Ok(TokenSettings { secret, ttl })
}

fn allow_ephemeral_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<bool, TokenConfigError> {
    let Some(value) = env.string(ALLOW_EPHEMERAL_ENV) else {
        if mode.is_debug() {
            return Ok(true);
        }
        return Err(TokenConfigError::MissingEnv {
            name: ALLOW_EPHEMERAL_ENV,
        });
    };
    match (parse_bool(&value), mode) {
        (Some(true), BuildMode::Release) => Err(TokenConfigError::EphemeralNotAllowed),
        (Some(flag), _) => Ok(flag),
        (None, BuildMode::Debug) => {
            warn!(value = %value, "invalid TOKEN_ALLOW_EPHEMERAL; allowing in debug build");
            Ok(true)
        }
        (None, BuildMode::Release) => Err(TokenConfigError::InvalidEnv {
            name: ALLOW_EPHEMERAL_ENV,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn ttl_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Duration, TokenConfigError> {
    let Some(value) = env.string(TTL_ENV) else {
        return Ok(DEFAULT_TOKEN_TTL);
    };
    match value.trim().parse::<u64>() {
        Ok(seconds) if (1..=MAX_TOKEN_TTL_SECONDS).contains(&seconds) => {
            Ok(Duration::from_secs(seconds))
        }
        _ if mode.is_debug() => {
            warn!(value = %value, "invalid TOKEN_TTL_SECONDS; using default");
            Ok(DEFAULT_TOKEN_TTL)
        }
        _ => Err(TokenConfigError::InvalidEnv {
            name: TTL_ENV,
            value,
            expected: TTL_EXPECTED,
        }),
    }
}

fn secret_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Zeroizing<Vec<u8>>, TokenConfigError> {
    let path = PathBuf::from(
        env.string(SECRET_FILE_ENV)
            .unwrap_or_else(|| TOKEN_SECRET_DEFAULT_PATH.to_string()),
    );

    match std::fs::read(&path) {
        Ok(bytes) => {
            let bytes = Zeroizing::new(bytes);
            let length = bytes.len();
            if length >= TOKEN_SECRET_MIN_LEN {
                return Ok(bytes);
            }
            if mode.is_debug() && allow_ephemeral {
                warn!(
                    path = %path.display(),
                    length,
                    "token secret too short; using temporary token secret (dev only)"
                );
                return Ok(ephemeral_secret());
            }
            Err(TokenConfigError::SecretTooShort {
                path,
                length,
                min_len: TOKEN_SECRET_MIN_LEN,
            })
        }
        Err(error) if allow_ephemeral => {
            warn!(
                path = %path.display(),
                error = %error,
                "using temporary token secret (dev only)"
            );
            Ok(ephemeral_secret())
        }
        Err(error) => Err(TokenConfigError::SecretRead {
            path,
            source: error,
        }),
    }
}

fn ephemeral_secret() -> Zeroizing<Vec<u8>> {
    let mut bytes = Zeroizing::new(vec![0_u8; TOKEN_SECRET_MIN_LEN]);
    rand::thread_rng().fill_bytes(bytes.as_mut_slice());
    bytes
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
