//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint, the schema wrappers from
//! [`crate::inbound::http::schemas`], and the bearer token security scheme.
//! The document backs Swagger UI in debug builds and the `openapi-dump`
//! binary.

use crate::inbound::http::enrollments::EnrollmentBody;
use crate::inbound::http::schemas::{
    EnrollmentEnvelopeSchema, EnrollmentListEnvelopeSchema, EnrollmentSchema, ErrorBodySchema,
    ErrorCodeSchema, MessageEnvelopeSchema, RosterEnvelopeSchema, StudentEnrollmentsSchema,
    StudentEnvelopeSchema, StudentSchema, TokenEnvelopeSchema,
};
use crate::inbound::http::users::{LoginRequest, TokenResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Security scheme name referenced by protected operations.
pub const BEARER_AUTH: &str = "bearerAuth";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_AUTH,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /api/v1/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Enrollment service API",
        description = "Role-gated access to student course enrollments.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("bearerAuth" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::enrollments::list_enrollments,
        crate::inbound::http::enrollments::reset_enrollments,
        crate::inbound::http::enrollments::get_student,
        crate::inbound::http::enrollments::add_enrollment,
        crate::inbound::http::enrollments::drop_enrollment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorCodeSchema,
        ErrorBodySchema,
        StudentSchema,
        EnrollmentSchema,
        StudentEnrollmentsSchema,
        EnrollmentBody,
        LoginRequest,
        TokenResponse,
        RosterEnvelopeSchema,
        StudentEnvelopeSchema,
        EnrollmentEnvelopeSchema,
        EnrollmentListEnvelopeSchema,
        TokenEnvelopeSchema,
        MessageEnvelopeSchema,
    )),
    tags(
        (name = "users", description = "Login and token issuance"),
        (name = "enrollments", description = "Student enrollment records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
