//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use mockable::Env;
use tracing::warn;

use backend::inbound::http::token_config::{
    BuildMode, TokenConfigError, TokenSettings, token_settings_from_env,
};

const BIND_ADDR_ENV: &str = "ENROLLMENTS_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while assembling the server configuration.
#[derive(thiserror::Error, Debug)]
pub enum ServerConfigError {
    /// The bind address could not be parsed.
    #[error("invalid value for ENROLLMENTS_BIND_ADDR='{value}'; expected host:port")]
    InvalidBindAddr { value: String },
    /// Token settings were rejected.
    #[error(transparent)]
    Token(#[from] TokenConfigError),
}

impl From<ServerConfigError> for std::io::Error {
    fn from(err: ServerConfigError) -> Self {
        std::io::Error::other(err.to_string())
    }
}

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) token: TokenSettings,
}

impl ServerConfig {
    /// Construct a server configuration from explicit settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, token: TokenSettings) -> Self {
        Self {
            bind_addr,
            token,
        }
    }

    /// Read the bind address and token settings from `env`.
    pub fn from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Self, ServerConfigError> {
        let bind_addr = bind_addr_from_env(env, mode)?;
        let token = token_settings_from_env(env, mode)?;
        Ok(Self::new(bind_addr, token))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn bind_addr_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<SocketAddr, ServerConfigError> {
    let Some(value) = env.string(BIND_ADDR_ENV) else {
        return Ok(default_bind_addr());
    };
    match value.trim().parse::<SocketAddr>() {
        Ok(addr) => Ok(addr),
        Err(_) if mode == BuildMode::Debug => {
            warn!(
                value = %value,
                default = DEFAULT_BIND_ADDR,
                "invalid ENROLLMENTS_BIND_ADDR; using default"
            );
            Ok(default_bind_addr())
        }
        Err(_) => Err(ServerConfigError::InvalidBindAddr { value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_with(vars: Vec<(&'static str, String)>) -> MockEnv {
        let mut env = MockEnv::new();
        env.expect_string().returning(move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone())
        });
        env
    }

    #[rstest]
    #[case(None, BuildMode::Release, "0.0.0.0:8080")]
    #[case(Some("127.0.0.1:9000"), BuildMode::Release, "127.0.0.1:9000")]
    #[case(Some("nonsense"), BuildMode::Debug, "0.0.0.0:8080")]
    fn bind_addr_defaults_and_overrides(
        #[case] raw: Option<&'static str>,
        #[case] mode: BuildMode,
        #[case] expected: &str,
    ) {
        let vars = raw
            .map(|value| vec![(BIND_ADDR_ENV, value.to_owned())])
            .unwrap_or_default();
        let addr = bind_addr_from_env(&env_with(vars), mode).expect("bind address");
        assert_eq!(addr.to_string(), expected);
    }

    #[rstest]
    fn release_rejects_unparseable_bind_addr() {
        let env = env_with(vec![(BIND_ADDR_ENV, "nonsense".to_owned())]);
        let err = bind_addr_from_env(&env, BuildMode::Release).expect_err("invalid address");
        assert!(matches!(err, ServerConfigError::InvalidBindAddr { .. }));
    }

    #[rstest]
    fn from_env_combines_address_and_token_settings() {
        let mut secret = NamedTempFile::new().expect("temp file");
        secret.write_all(&[b'k'; 32]).expect("write secret");
        let env = env_with(vec![
            (BIND_ADDR_ENV, "127.0.0.1:8181".to_owned()),
            ("TOKEN_SECRET_FILE", secret.path().display().to_string()),
            ("TOKEN_ALLOW_EPHEMERAL", "0".to_owned()),
            ("TOKEN_TTL_SECONDS", "90".to_owned()),
        ]);

        let config = ServerConfig::from_env(&env, BuildMode::Release).expect("config");
        assert_eq!(config.bind_addr().port(), 8181);
        assert_eq!(config.token.ttl.as_secs(), 90);
        assert_eq!(config.token.secret.len(), 32);
    }

    #[rstest]
    fn token_errors_surface_through_server_config() {
        let env = env_with(vec![("TOKEN_ALLOW_EPHEMERAL", "1".to_owned())]);
        let err = ServerConfig::from_env(&env, BuildMode::Release)
            .expect_err("ephemeral in release");
        assert!(matches!(
            err,
            ServerConfigError::Token(TokenConfigError::EphemeralNotAllowed)
        ));
    }
}
