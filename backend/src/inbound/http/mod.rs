//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod auth;
pub mod enrollments;
pub mod envelope;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod token_config;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Mount the `/api/v1` routes.
///
/// Callers register [`state::HttpState`] and [`auth::TokenIssuer`] as app
/// data. `POST /enrollments/reset` is registered ahead of the
/// `/enrollments/{student_id}` routes so it is never read as a student id.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .service(users::login)
            .service(enrollments::list_enrollments)
            .service(enrollments::reset_enrollments)
            .service(enrollments::get_student)
            .service(enrollments::add_enrollment)
            .service(enrollments::drop_enrollment),
    );
}
