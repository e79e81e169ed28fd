//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

fn register_metrics() {
    metrics::describe_counter!(
        "switchboard_requests_total",
        "Total number of chat requests processed"
    );
    metrics::describe_histogram!(
        "switchboard_request_duration_seconds",
        "Chat request duration in seconds"
    );
    metrics::describe_counter!(
        "switchboard_upstream_errors_total",
        "Non-success responses received from providers"
    );
}

/// Prometheus metrics endpoint handler
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a chat request outcome
pub fn record_request(provider: &str, status: &str, duration_secs: f64) {
    metrics::counter!(
        "switchboard_requests_total",
        "provider" => provider.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("switchboard_request_duration_seconds", "provider" => provider.to_string())
        .record(duration_secs);
}

/// Record a non-success provider status
pub fn record_upstream_error(provider: &str, status_code: u16) {
    metrics::counter!(
        "switchboard_upstream_errors_total",
        "provider" => provider.to_string(),
        "status_code" => status_code.to_string()
    )
    .increment(1);
}
