//! Enrollment service entry-point: reads configuration, wires adapters, and
//! serves the REST API, health probes, and OpenAPI docs.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::token_config::BuildMode;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let mode = BuildMode::from_debug_assertions();
    let config = ServerConfig::from_env(&DefaultEnv::new(), mode)?;
    info!(bind_addr = %config.bind_addr(), ?mode, "configuration loaded");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
