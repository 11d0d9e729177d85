//! Tests for HTTP error mapping.

use super::*;
use crate::domain::Error;
use crate::inbound::http::envelope::Envelope;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[fixture]
fn internal_error_case(expected_trace_id: String) -> Error {
    Error::internal("enrollment store is inconsistent: 650610001/261207")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"secret": "x"}))
}

#[fixture]
fn invalid_request_case(expected_trace_id: String) -> Error {
    Error::invalid_request("courseId must be exactly 6 digits")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"field": "courseId"}))
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no auth"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("denied"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("duplicate"), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn assert_error_response(
    error: Error,
    expected_status: StatusCode,
    expected_trace_id: Option<&str>,
) -> Envelope<Value> {
    let response = ResponseError::error_response(&error);
    assert_eq!(response.status(), expected_status);

    let header = response.headers().get(TRACE_ID_HEADER);
    match expected_trace_id {
        Some(expected) => {
            let trace_id = header
                .expect("trace-id header is set by error_response")
                .to_str()
                .expect("trace-id is valid UTF-8");
            assert_eq!(trace_id, expected);
        }
        None => assert!(header.is_none(), "trace-id header should not be present"),
    }

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("envelope JSON deserialisation succeeds")
}

#[rstest]
#[actix_web::test]
async fn error_responses_include_trace_id_and_payloads(
    #[from(internal_error_case)] internal_error: Error,
    #[from(invalid_request_case)] invalid_request: Error,
    expected_trace_id: String,
) {
    let redacted = assert_error_response(
        internal_error,
        StatusCode::INTERNAL_SERVER_ERROR,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert!(!redacted.success);
    assert_eq!(redacted.message, "Internal server error");
    let body = redacted.error.expect("error body");
    assert_eq!(body.code, ErrorCode::InternalError);
    assert!(body.details.is_none());

    let payload = assert_error_response(
        invalid_request,
        StatusCode::BAD_REQUEST,
        Some(expected_trace_id.as_str()),
    )
    .await;
    assert_eq!(payload.message, "courseId must be exactly 6 digits");
    assert_eq!(payload.trace_id.as_deref(), Some(TRACE_ID));
    let body = payload.error.expect("error body");
    assert_eq!(body.code, ErrorCode::InvalidRequest);
    assert_eq!(body.details, Some(json!({"field": "courseId"})));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::conflict("Student is already enrolled in this course");

    let payload = assert_error_response(error, StatusCode::CONFLICT, None).await;
    assert_eq!(payload.trace_id, None);
    assert_eq!(payload.error.map(|body| body.code), Some(ErrorCode::Conflict));
}

#[given("a forbidden error code")]
fn a_forbidden_error_code() -> ErrorCode {
    ErrorCode::Forbidden
}

#[when("the adapter maps the code to an HTTP status")]
fn the_adapter_maps_the_code_to_http_status(code: ErrorCode) -> StatusCode {
    super::status_for(code)
}

#[then("the status is 403 Forbidden")]
fn the_status_is_403_forbidden(status: StatusCode) {
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[given("an internal error raised by the store")]
fn an_internal_error_raised_by_the_store() -> Error {
    Error::internal("enrollment store unavailable: lock poisoned")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": true}))
}

#[when("the adapter redacts the client payload")]
fn the_adapter_redacts_the_client_payload(error: Error) -> Error {
    super::redact_if_internal(&error)
}

#[then("clients see the generic internal error message")]
fn clients_see_the_generic_internal_error_message(redacted: Error) {
    assert_eq!(redacted.message(), "Internal server error");
    assert_eq!(redacted.details(), None);
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn forbidden_maps_to_403() {
    let code = a_forbidden_error_code();
    let status = the_adapter_maps_the_code_to_http_status(code);
    the_status_is_403_forbidden(status);
}

#[rstest]
fn internal_errors_are_redacted() {
    let error = an_internal_error_raised_by_the_store();
    let redacted = the_adapter_redacts_the_client_payload(error);
    clients_see_the_generic_internal_error_message(redacted);
}

#[rstest]
fn non_internal_errors_pass_through() {
    let error = Error::forbidden("Forbidden access");
    assert_eq!(super::redact_if_internal(&error), error);
}

#[test]
fn from_actix_error_is_redacted_internal_error() {
    let actix_err = actix_web::error::ErrorBadRequest("boom");
    let err: Error = actix_err.into();

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), "Internal server error");
    assert_eq!(err.trace_id(), None);
    assert_eq!(err.details(), None);
}
