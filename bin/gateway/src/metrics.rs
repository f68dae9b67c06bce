//! Prometheus metrics for the gateway.

use axum::{extract::MatchedPath, extract::Request, middleware::Next, response::Response};
use metrics::{counter, describe_counter};

/// Aggregated metrics for the gateway.
///
/// Registers metric descriptions with the global registry on creation;
/// recording goes through the global `metrics` macros.
#[derive(Debug, Clone)]
pub struct Metrics {
    _private: (),
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics instance and register all metric descriptions.
    pub fn new() -> Self {
        Self::register_descriptions();
        Self { _private: () }
    }

    fn register_descriptions() {
        describe_counter!(
            "gateway_http_requests_total",
            "Total HTTP requests served, by route and status"
        );
        describe_counter!(
            "gateway_transactions_submitted_total",
            "Total transactions accepted by the node, by operation"
        );
    }

    /// Record a transaction accepted into the node's pool.
    pub fn record_submission(&self, op: &str) {
        counter!("gateway_transactions_submitted_total", "op" => op.to_string()).increment(1);
    }
}

/// Request-counting middleware; labels by matched route and response status.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let route = req.extensions().get::<MatchedPath>().map_or_else(
        || req.uri().path().to_owned(),
        |path| path.as_str().to_owned(),
    );

    let response = next.run(req).await;

    counter!(
        "gateway_http_requests_total",
        "route" => route,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);

    response
}

/// Install the Prometheus metrics exporter and start the HTTP server.
///
/// Returns an error if the server fails to bind to the specified port.
pub fn install_prometheus_exporter(port: u16) -> eyre::Result<()> {
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| eyre::eyre!("Failed to install Prometheus exporter: {}", e))?;

    Ok(())
}
