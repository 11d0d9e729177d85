//! Enrollment service library: domain model and access policy, HTTP
//! adapters, in-memory storage, and OpenAPI docs.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
