//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::{ApiResult, Error};
use backend::inbound::http::auth::TokenIssuer;
use backend::inbound::http::configure_api;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    issuer: web::Data<TokenIssuer>,
}

async fn route_not_found() -> ApiResult<actix_web::HttpResponse> {
    Err(Error::not_found("Route not found"))
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        issuer,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(issuer)
        .wrap(Trace)
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding the store, binding the socket,
/// or registering metrics fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(
        build_http_state().map_err(|err| std::io::Error::other(format!("seed data: {err}")))?,
    );
    let ServerConfig { bind_addr, token } = config;
    let issuer = web::Data::new(TokenIssuer::new(&token.secret, token.ttl));

    #[cfg(feature = "metrics")]
    let prometheus = metrics::make_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            issuer: issuer.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "enrollment service listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use backend::domain::TRACE_ID_HEADER;
    use serde_json::Value;
    use std::time::Duration;

    fn deps() -> AppDependencies {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: web::Data::new(build_http_state().expect("seeded state")),
            issuer: web::Data::new(TokenIssuer::new(&[7_u8; 32], Duration::from_secs(60))),
        }
    }

    #[actix_web::test]
    async fn unknown_routes_get_an_envelope_and_trace_id() {
        let app = test::init_service(build_app(deps())).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/nowhere").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "not_found");
    }

    #[actix_web::test]
    async fn probes_and_api_share_one_app() {
        let app = test::init_service(build_app(deps())).await;
        let readiness = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(readiness.status(), StatusCode::OK);

        let unauthenticated = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/v1/enrollments").to_request(),
        )
        .await;
        assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);
        assert!(unauthenticated.headers().contains_key(TRACE_ID_HEADER));
    }
}
