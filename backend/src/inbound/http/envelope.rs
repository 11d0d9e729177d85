//! Uniform JSON response envelope.
//!
//! Every body the API returns, success or failure, has the shape
//! `{success, message, data?, error?, traceId?}`. Handlers build successes
//! with [`ok`]; failures are produced by the `ResponseError` impl in
//! [`super::error`].

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Error, ErrorCode, TraceId};

/// Machine-readable part of a failure envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Response envelope shared by every endpoint.
///
/// # Examples
/// ```
/// use backend::inbound::http::envelope::Envelope;
///
/// let body = Envelope::success("Enrollment added", 42);
/// assert!(body.success);
/// assert_eq!(body.data, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn current_trace_id() -> Option<String> {
    TraceId::current().map(|id| id.to_string())
}

impl<T> Envelope<T> {
    /// Successful envelope carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            trace_id: current_trace_id(),
        }
    }
}

impl Envelope<()> {
    /// Successful envelope with no payload.
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
            trace_id: current_trace_id(),
        }
    }

    /// Failure envelope mirroring `error` as given; redaction is the caller's job.
    pub fn failure(error: &Error) -> Self {
        Self {
            success: false,
            message: error.message().to_owned(),
            data: None,
            error: Some(ErrorBody {
                code: error.code(),
                details: error.details().cloned(),
            }),
            trace_id: error.trace_id().map(str::to_owned),
        }
    }
}

/// `200 OK` with a success envelope around `data`.
pub fn ok<T: Serialize>(message: impl Into<String>, data: T) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::success(message, data))
}
