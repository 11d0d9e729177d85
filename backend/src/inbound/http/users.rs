//! Login handler.
//!
//! ```text
//! POST /api/v1/login {"username":"student1","password":"student-pass"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use super::auth::TokenIssuer;
use super::envelope;
use super::schemas::{MessageEnvelopeSchema, TokenEnvelopeSchema};
use super::state::HttpState;
use crate::domain::{Error, LoginCredentials, LoginValidationError, UserValidationError};
use crate::inbound::http::ApiResult;

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "student1")]
    pub username: String,
    #[schema(example = "student-pass")]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Issued bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    /// Always `Bearer`.
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Lifetime in seconds.
    #[schema(example = 3600)]
    pub expires_in: u64,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let (field, code) = match &err {
        LoginValidationError::InvalidUsername(UserValidationError::EmptyUsername) => {
            ("username", "empty_username")
        }
        LoginValidationError::InvalidUsername(UserValidationError::UsernameTooLong { .. }) => {
            ("username", "username_too_long")
        }
        LoginValidationError::InvalidUsername(
            UserValidationError::UsernameInvalidCharacters,
        ) => ("username", "invalid_username"),
        LoginValidationError::EmptyPassword => ("password", "empty_password"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = TokenEnvelopeSchema),
        (status = 400, description = "Invalid request", body = MessageEnvelopeSchema),
        (status = 401, description = "Invalid credentials", body = MessageEnvelopeSchema),
        (status = 500, description = "Internal server error", body = MessageEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    issuer: web::Data<TokenIssuer>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let username = state.login.authenticate(&credentials).await?;
    let token = issuer.issue(&username)?;
    Ok(envelope::ok(
        "Login successful",
        TokenResponse {
            token,
            token_type: "Bearer".to_owned(),
            expires_in: issuer.ttl().as_secs(),
        },
    ))
}
