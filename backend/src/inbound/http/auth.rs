//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs whose `sub` claim is the username. The
//! [`AuthenticatedUser`] extractor verifies the `Authorization: Bearer`
//! header against the [`TokenIssuer`] registered as app data and yields the
//! username; resolving that username to a role is the domain's job.

use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::{Ready, ready};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mockable::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Error, Username};

const INVALID_TOKEN: &str = "Invalid or expired token";

/// Claims carried by issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    /// Issue time, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry time, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signs and verifies bearer tokens with one HMAC secret.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Create an issuer using the system clock.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self::with_clock(secret, ttl, Arc::new(DefaultClock))
    }

    /// Create an issuer whose `iat`/`exp` come from `clock`.
    pub fn with_clock(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
            clock,
        }
    }

    /// Lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a token for `username`.
    pub fn issue(&self, username: &Username) -> Result<String, Error> {
        let issued_at = self.clock.utc().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs())
            .map_err(|_| Error::internal("token lifetime out of range"))?;
        let claims = Claims {
            sub: username.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(ttl),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| Error::internal(format!("failed to sign token: {err}")))
    }

    /// Verify signature and expiry and return the token's username.
    pub fn verify(&self, token: &str) -> Result<Username, Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|err| {
            debug!(error = %err, "bearer token rejected");
            Error::unauthorized(INVALID_TOKEN)
        })?;
        Username::new(data.claims.sub).map_err(|_| Error::unauthorized(INVALID_TOKEN))
    }
}

fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Username proven by a valid bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(Username);

impl AuthenticatedUser {
    /// Username named by the verified token.
    pub fn username(&self) -> &Username {
        &self.0
    }

    fn from_http_request(req: &HttpRequest) -> Result<Self, Error> {
        let issuer = req
            .app_data::<web::Data<TokenIssuer>>()
            .ok_or_else(|| Error::internal("token issuer not configured"))?;
        let value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(|| Error::unauthorized("Authentication required"))?
            .to_str()
            .map_err(|_| Error::unauthorized("Malformed Authorization header"))?;
        let token =
            bearer_token(value).ok_or_else(|| Error::unauthorized("Bearer token required"))?;
        issuer.verify(token).map(Self)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_http_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test};
    use chrono::{TimeDelta, Utc};
    use mockable::MockClock;
    use rstest::rstest;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Duration::from_secs(60))
    }

    fn username(raw: &str) -> Username {
        Username::new(raw).expect("valid username")
    }

    #[rstest]
    fn issued_tokens_verify() {
        let issuer = issuer();
        let token = issuer.issue(&username("student1")).expect("token");
        assert_eq!(issuer.verify(&token).expect("valid token"), username("student1"));
    }

    #[rstest]
    fn tokens_from_another_secret_are_rejected() {
        let issuer = issuer();
        let other = TokenIssuer::new(b"another-secret-another-secret-xx", Duration::from_secs(60));
        let token = other.issue(&username("admin")).expect("token");
        let err = issuer.verify(&token).expect_err("foreign signature");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    fn expired_tokens_are_rejected() {
        let mut clock = MockClock::new();
        clock
            .expect_utc()
            .return_const(Utc::now() - TimeDelta::hours(2));
        let stale = TokenIssuer::with_clock(SECRET, Duration::from_secs(60), Arc::new(clock));
        let token = stale.issue(&username("admin")).expect("token");

        let err = issuer().verify(&token).expect_err("expired");
        assert_eq!(err.message(), INVALID_TOKEN);
    }

    #[rstest]
    #[case("Bearer abc", Some("abc"))]
    #[case("bearer   abc  ", Some("abc"))]
    #[case("Basic abc", None)]
    #[case("Bearer ", None)]
    #[case("abc", None)]
    fn bearer_scheme_is_parsed(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(bearer_token(header), expected);
    }

    async fn call_with(authorization: Option<String>) -> (StatusCode, String) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(issuer()))
                .route(
                    "/",
                    web::get().to(|user: AuthenticatedUser| async move {
                        HttpResponse::Ok().body(user.username().to_string())
                    }),
                ),
        )
        .await;
        let mut request = actix_test::TestRequest::get().uri("/");
        if let Some(value) = authorization {
            request = request.insert_header((header::AUTHORIZATION, value));
        }
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn extractor_accepts_valid_bearer_tokens() {
        let token = issuer().issue(&username("student2")).expect("token");
        let (status, body) = call_with(Some(format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "student2");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Bearer not-a-jwt".to_owned()))]
    #[case(Some("Token abc".to_owned()))]
    #[actix_web::test]
    async fn extractor_rejects_missing_or_bad_credentials(#[case] authorization: Option<String>) {
        let (status, _) = call_with(authorization).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
