//! Prometheus request metrics exposed on `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use prometheus::Registry;

const NAMESPACE: &str = "enrollments";
const ENDPOINT: &str = "/metrics";

/// Build the request metrics middleware over a fresh registry.
///
/// # Errors
/// Returns [`std::io::Error`] when the collectors cannot be registered.
pub(crate) fn make_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(NAMESPACE)
        .registry(Registry::new())
        .endpoint(ENDPOINT)
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}
